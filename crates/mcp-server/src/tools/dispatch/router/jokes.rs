use super::super::{text_result, topic_or_default, CallToolResult, ComedyService, McpError};
use crate::tools::schemas::jokes::{CodeJokeRequest, FunnyCommentRequest, ProgrammingJokeRequest};
use comedy_core::{render_contextual, render_related, Fallback, Tone};

/// The joke as a comment line with an empty `Relates to` context.
pub(in crate::tools::dispatch) async fn programming_joke(
    service: &ComedyService,
    request: ProgrammingJokeRequest,
) -> Result<CallToolResult, McpError> {
    let topic = topic_or_default(request.topic);
    log::debug!("get_programming_joke (topic: {topic})");

    let text = match service.jokes().fetch_joke().await {
        Ok(joke) => render_related(&joke, ""),
        Err(err) => {
            log::error!("Error getting programming joke: {err}");
            Fallback::HumorCircuitsDown.text().to_string()
        }
    };
    Ok(text_result(text))
}

/// Code snippets get the contextual comment block; plain comments get a tone sentence.
///
/// A failed fetch does not change the shape of the reply, only the joke inside it.
pub(in crate::tools::dispatch) async fn funny_comment(
    service: &ComedyService,
    request: FunnyCommentRequest,
) -> Result<CallToolResult, McpError> {
    let topic = topic_or_default(request.topic);
    let joke = service
        .jokes()
        .fetch_joke_or(Fallback::DefaultJoke.text())
        .await;

    let text = match request.code.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(code) => render_contextual(&joke, code, &topic),
        None => {
            let tone = Tone::detect(&request.comment);
            log::debug!("get_funny_comment tone: {}", tone.as_str());
            tone.render(&request.comment, &joke)
        }
    };
    Ok(text_result(text))
}

pub(in crate::tools::dispatch) async fn code_joke(
    service: &ComedyService,
    request: CodeJokeRequest,
) -> Result<CallToolResult, McpError> {
    let topic = topic_or_default(request.topic);
    log::info!(
        "Attempting to fetch a funny programming joke for code: '{}'",
        request.code
    );

    let text = match service.jokes().fetch_joke().await {
        Ok(joke) => render_contextual(&joke, &request.code, &topic),
        Err(err) => {
            log::warn!("Joke source did not return a joke: {err}");
            Fallback::null_funny_bone_comment(&request.code)
        }
    };
    Ok(text_result(text))
}
