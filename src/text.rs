//! Text module: the reference matcher over a slice of strings.
//!
//! This module provides the TextMatcher and TextSearchQuery types.

use std::hash::Hash;
use crate::config::QueryConfig;
use crate::matcher::Matcher;
use crate::query::SearchQuery;
use crate::WiresearchError;

/// Matches terms by substring containment, or equality for exact terms.
#[derive(Debug)]
pub struct TextMatcher<'c, S> {
    candidates: &'c [S],
    case_sensitive: bool,
}

impl<'c, S: AsRef<str>> TextMatcher<'c, S> {
    pub fn new(candidates: &'c [S], case_sensitive: bool) -> Self {
        Self { candidates, case_sensitive }
    }

    fn is_match(&self, candidate: &str, keyword: &str, exact: bool) -> bool {
        if self.case_sensitive {
            compare(candidate, keyword, exact)
        } else {
            compare(&candidate.to_lowercase(), &keyword.to_lowercase(), exact)
        }
    }
}

fn compare(candidate: &str, keyword: &str, exact: bool) -> bool {
    if exact {
        candidate == keyword
    } else {
        candidate.contains(keyword)
    }
}

impl<'c, S: AsRef<str>> Matcher<&'c S> for TextMatcher<'c, S> {
    fn matches(&self, keyword: &str, exact: bool, include: bool) -> Vec<&'c S> {
        self.candidates
            .iter()
            .filter(|c| self.is_match(c.as_ref(), keyword, exact) == include)
            .collect()
    }
}

/// A search query bound to string matching.
#[derive(Debug, Clone)]
pub struct TextSearchQuery {
    query: SearchQuery,
    case_sensitive: bool,
}

impl TextSearchQuery {
    pub fn new(raw: &str) -> Self {
        Self::with_config(raw, &QueryConfig::default())
    }

    pub fn with_config(raw: &str, config: &QueryConfig) -> Self {
        Self {
            query: SearchQuery::with_config(raw, config),
            case_sensitive: config.case_sensitive,
        }
    }

    /// Candidates selected by the query. Element order follows the first
    /// operand of each combination.
    pub fn search<'c, S>(&self, candidates: &'c [S]) -> Result<Vec<&'c S>, WiresearchError>
    where
        S: AsRef<str> + Eq + Hash,
    {
        let matcher = TextMatcher::new(candidates, self.case_sensitive);
        self.query.evaluate(&matcher)
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}
