//! Config module: options shared by the normalizer, compiler and text matcher.
//!
//! This module provides the QueryConfig type and a builder for it.

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Case-sensitive comparisons in the text matcher.
    pub case_sensitive: bool,
    /// Accept `and`/`Or`/... as operator keywords.
    pub case_insensitive_keywords: bool,
    /// Keep a double-quoted region as one token, spaces included.
    pub protect_phrases: bool,
    /// Recognize NOT, XOR, NAND and NOR as operator tokens.
    pub extended_operators: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            case_insensitive_keywords: true,
            protect_phrases: true,
            extended_operators: false,
        }
    }
}

impl QueryConfig {
    pub fn builder() -> QueryConfigBuilder {
        QueryConfigBuilder::new()
    }
}

#[derive(Debug, Default)]
pub struct QueryConfigBuilder {
    config: QueryConfig,
}

impl QueryConfigBuilder {
    pub fn new() -> Self {
        Self { config: QueryConfig::default() }
    }
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.config.case_sensitive = yes;
        self
    }
    pub fn case_insensitive_keywords(mut self, yes: bool) -> Self {
        self.config.case_insensitive_keywords = yes;
        self
    }
    pub fn protect_phrases(mut self, yes: bool) -> Self {
        self.config.protect_phrases = yes;
        self
    }
    pub fn extended_operators(mut self, yes: bool) -> Self {
        self.config.extended_operators = yes;
        self
    }
    pub fn build(self) -> QueryConfig {
        self.config
    }
}
