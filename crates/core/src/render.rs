use crate::fragment::{classify, CodeFragment};

/// Classify `fragment` and wrap `joke` in a comment block tailored to its shape.
///
/// `topic` is accepted for API parity with the tool surface but does not change the output.
pub fn render_contextual(joke: &str, fragment: &str, _topic: &str) -> String {
    render_fragment(joke, fragment, &classify(fragment))
}

/// Single comment line relating `joke` to `original`: `// {joke} (Relates to: {original})`.
pub fn render_related(joke: &str, original: &str) -> String {
    format!("// {joke} (Relates to: {original})")
}

/// Render an already classified fragment. `original` is quoted only for unknown shapes.
pub fn render_fragment(joke: &str, original: &str, fragment: &CodeFragment) -> String {
    let lines = match fragment {
        CodeFragment::Variable { identifier, value } => vec![
            format!("// Variable {identifier} walks into a bar..."),
            format!("// {joke}"),
            format!("// (Fun fact: Even {value} would laugh at that one!)"),
        ],
        CodeFragment::Function { identifier } => vec![
            format!("// Function {identifier} says:"),
            format!("// {joke}"),
            "// (Warning: This joke has O(n) complexity!)".to_string(),
        ],
        CodeFragment::Class { identifier } => vec![
            format!("// Class {identifier} inherits from Humor:"),
            format!("// {joke}"),
            "// (Implements ILaughable)".to_string(),
        ],
        CodeFragment::Unknown => vec![
            format!("// {joke}"),
            format!("// (Relates to: {original})"),
        ],
    };
    lines.join("\n")
}
