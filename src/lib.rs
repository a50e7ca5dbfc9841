//! Wiresearch: a boolean search-query compiler and evaluator.
//!
//! A human-typed query such as `cats AND (dogs OR -fish) "exact phrase"` goes
//! through three stages:
//! - Normalization (whitespace collapsing, implicit `AND` between terms)
//! - Compilation to a flat postfix program (shunting-yard)
//! - Evaluation against a caller-supplied [`Matcher`], combining the per-term
//!   results with set intersection (`AND`) and union (`OR`)
//!
//! ```
//! use wiresearch::TextSearchQuery;
//!
//! let candidates = ["cat", "catalog", "dog", "fish"];
//! let query = TextSearchQuery::new("cat OR -fish");
//! let found = query.search(&candidates).unwrap();
//! assert_eq!(found, vec![&"cat", &"catalog", &"dog"]);
//! ```

mod types;
mod ir;
mod term;
mod config;
mod normalize;
mod compiler;
mod matcher;
mod eval;
mod query;
mod text;

pub use types::*;
pub use ir::*;
pub use term::*;
pub use config::*;
pub use normalize::*;
pub use compiler::*;
pub use matcher::*;
pub use eval::*;
pub use query::*;
pub use text::*;

use thiserror::Error;

/// Unified error type for Wiresearch operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiresearchError {
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("Malformed query: {0}")]
    MalformedQuery(String),
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(Operator),
}

pub type Result<T> = std::result::Result<T, WiresearchError>;
