/// Phrasing used when a caller only sends a free-text comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Solo,
    Troll,
    Neutral,
}

const SOLO_KEYWORDS: &[&str] = &["solo", "lonely"];
const TROLL_KEYWORDS: &[&str] = &["troll", "coworker"];

impl Tone {
    /// Pick a tone from keywords in `comment`. Matching is case-insensitive; solo keywords win.
    pub fn detect(comment: &str) -> Self {
        let normalized = comment.trim().to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|k| normalized.contains(k));

        if mentions(SOLO_KEYWORDS) {
            Self::Solo
        } else if mentions(TROLL_KEYWORDS) {
            Self::Troll
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Troll => "troll",
            Self::Neutral => "neutral",
        }
    }

    /// Wrap `joke` in this tone's sentence. `comment` is embedded exactly as given.
    pub fn render(self, comment: &str, joke: &str) -> String {
        match self {
            Self::Solo => format!("Solo dev boost requested for: '{comment}'. {joke}"),
            Self::Troll => format!("Coworker trolling mode engaged for: '{comment}'. {joke}"),
            Self::Neutral => format!("Comic relief requested for: '{comment}'. {joke}"),
        }
    }
}
