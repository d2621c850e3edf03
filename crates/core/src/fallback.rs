/// Fixed sentences returned when the joke source cannot deliver.
///
/// Existing clients match on these strings, so the text must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Stand-in joke used when rendering should still go ahead.
    DefaultJoke,
    /// Lead-in for a code joke that could not be fetched.
    NullFunnyBone,
    /// Whole reply of the plain joke tool when the fetch fails.
    HumorCircuitsDown,
}

impl Fallback {
    pub const fn text(self) -> &'static str {
        match self {
            Self::DefaultJoke => "Why did the programmer quit his job? He didn't get arrays.",
            Self::NullFunnyBone => "I tried to think of a joke, but my funny bone returned null.",
            Self::HumorCircuitsDown => {
                "Couldn't fetch a joke right now, the programmer humor circuits are down!"
            }
        }
    }

    /// `// <null funny bone> (Original: {original})`
    pub fn null_funny_bone_comment(original: &str) -> String {
        format!("// {} (Original: {original})", Self::NullFunnyBone.text())
    }
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
