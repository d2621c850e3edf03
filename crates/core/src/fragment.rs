/// Shape of a code fragment, as far as plain text heuristics can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// Assignment-like text (`int a = 5;`)
    Variable { identifier: String, value: String },
    /// Call or signature-like text (`doSomething(x, y)`)
    Function { identifier: String },
    /// Type declaration-like text (`public class Widget`)
    Class { identifier: String },
    /// Anything else, including empty input
    Unknown,
}

impl CodeFragment {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Variable { .. } => "variable",
            Self::Function { .. } => "function",
            Self::Class { .. } => "class",
            Self::Unknown => "unknown",
        }
    }

    /// Primary identifier, empty for [`CodeFragment::Unknown`].
    pub fn identifier(&self) -> &str {
        match self {
            Self::Variable { identifier, .. }
            | Self::Function { identifier }
            | Self::Class { identifier } => identifier,
            Self::Unknown => "",
        }
    }

    /// Assigned value, empty for everything except [`CodeFragment::Variable`].
    pub fn value(&self) -> &str {
        match self {
            Self::Variable { value, .. } => value,
            _ => "",
        }
    }
}

/// Classify a fragment by textual shape.
///
/// Rules are checked in order and the first match wins, so `x = foo()` is a variable and
/// `class Foo(Base)` is a function. Never fails.
pub fn classify(fragment: &str) -> CodeFragment {
    if let Some((left, right)) = fragment.split_once('=') {
        let value = right.trim();
        let value = value.strip_suffix(';').unwrap_or(value);
        let identifier = left.split_whitespace().last().unwrap_or_default();
        return CodeFragment::Variable {
            identifier: identifier.to_string(),
            value: value.to_string(),
        };
    }

    if let Some((before, _)) = fragment.split_once('(') {
        return CodeFragment::Function {
            identifier: before.trim().to_string(),
        };
    }

    if let Some((_, after)) = fragment.split_once("class") {
        return CodeFragment::Class {
            identifier: after.trim().to_string(),
        };
    }

    CodeFragment::Unknown
}
