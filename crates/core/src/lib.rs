//! # Comedy Core
//!
//! Turns a fetched joke into a code comment that fits the snippet it was requested for.
//!
//! ## Architecture
//!
//! ```text
//! Fragment (comment or code)
//!     │
//!     ├──> Classification (first match wins)
//!     │    ├─> `=`      → Variable { identifier, value }
//!     │    ├─> `(`      → Function { identifier }
//!     │    ├─> "class"  → Class { identifier }
//!     │    └─> else     → Unknown
//!     │
//!     └──> Rendering
//!          ├─> contextual: per-shape `//` comment block
//!          └─> tone: solo / troll / neutral sentence (free-text comments)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use comedy_core::{classify, render_contextual, CodeFragment};
//!
//! assert_eq!(
//!     classify("int a = 5;"),
//!     CodeFragment::Variable { identifier: "a".into(), value: "5".into() },
//! );
//!
//! let comment = render_contextual("Light attracts bugs.", "doSomething(x, y)", "programming");
//! assert_eq!(
//!     comment,
//!     "// Function doSomething says:\n// Light attracts bugs.\n// (Warning: This joke has O(n) complexity!)",
//! );
//! ```

mod fallback;
mod fragment;
mod render;
mod tone;

pub use fallback::Fallback;
pub use fragment::{classify, CodeFragment};
pub use render::{render_contextual, render_fragment, render_related};
pub use tone::Tone;
