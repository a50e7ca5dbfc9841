//! Query module: wraps a normalized and compiled query and provides the main
//! execution API.
//!
//! This module provides the SearchQuery type.

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use crate::compiler::Compiler;
use crate::config::QueryConfig;
use crate::eval::Evaluator;
use crate::ir::Program;
use crate::matcher::Matcher;
use crate::normalize::Normalizer;
use crate::term::Term;
use crate::WiresearchError;

/// A query compiled once and ready to run against any matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    normalized: String,
    program: Program,
}

impl SearchQuery {
    /// Compiles `raw` with the default configuration. A query with invalid
    /// characters compiles to an empty program.
    pub fn new(raw: &str) -> Self {
        Self::with_config(raw, &QueryConfig::default())
    }

    pub fn with_config(raw: &str, config: &QueryConfig) -> Self {
        let normalized = Normalizer::new(config).normalize(raw);
        Self::from_normalized(raw, normalized, config)
    }

    /// Like [`SearchQuery::with_config`], but reports invalid characters.
    pub fn try_new(raw: &str, config: &QueryConfig) -> Result<Self, WiresearchError> {
        let normalized = Normalizer::new(config).try_normalize(raw)?;
        Ok(Self::from_normalized(raw, normalized, config))
    }

    fn from_normalized(raw: &str, normalized: String, config: &QueryConfig) -> Self {
        let program = Compiler::new(config).compile(&normalized);
        log::debug!("compiled query {:?} into {} instructions", normalized, program.len());
        log::trace!("postfix program: {}", program);
        Self {
            raw: raw.to_string(),
            normalized,
            program,
        }
    }

    /// Runs the query. Errors are returned, never partial results.
    pub fn evaluate<T, M>(&self, matcher: &M) -> Result<Vec<T>, WiresearchError>
    where
        T: Clone + Eq + Hash,
        M: Matcher<T> + ?Sized,
    {
        Evaluator::new(&self.program).run(matcher).map_err(|e| {
            log::debug!("query {:?} failed: {}", self.raw, e);
            e
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The terms the query will hand to the matcher, in evaluation order.
    pub fn terms(&self) -> Vec<Term<'_>> {
        self.program.terms()
    }

    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }
}

impl FromStr for SearchQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SearchQuery::new(s))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
