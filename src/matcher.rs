//! Matcher module: the capability the evaluator uses to resolve a single term.
//!
//! This module provides the Matcher trait and its implementation for closures.

/// Resolves one term against the caller's candidates.
///
/// Returns the candidates whose match state agrees with `include`: with
/// `include == false` the matcher returns the candidates that do NOT match
/// `keyword`. `exact` selects full equality over substring containment.
pub trait Matcher<T> {
    fn matches(&self, keyword: &str, exact: bool, include: bool) -> Vec<T>;
}

impl<T, F> Matcher<T> for F
where
    F: Fn(&str, bool, bool) -> Vec<T>,
{
    fn matches(&self, keyword: &str, exact: bool, include: bool) -> Vec<T> {
        self(keyword, exact, include)
    }
}
