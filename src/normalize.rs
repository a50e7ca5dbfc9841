//! Normalizer module: canonicalizes a raw query string before compilation.
//!
//! Whitespace collapses to single spaces, keyword case is canonicalized and
//! whitespace between terms becomes an explicit `AND`.

use crate::config::QueryConfig;
use crate::types::Operator;
use crate::WiresearchError;

/// Rewrites raw queries into the single-spaced form the compiler scans.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    keywords_ignore_case: bool,
    protect_phrases: bool,
    extended_operators: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(&QueryConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            keywords_ignore_case: config.case_insensitive_keywords,
            protect_phrases: config.protect_phrases,
            extended_operators: config.extended_operators,
        }
    }

    /// Normalizes `raw`, or returns the empty string if it contains a
    /// character outside the query alphabet.
    pub fn normalize(&self, raw: &str) -> String {
        match self.try_normalize(raw) {
            Ok(normalized) => normalized,
            Err(e) => {
                log::debug!("ignoring query {:?}: {}", raw, e);
                String::new()
            }
        }
    }

    pub fn try_normalize(&self, raw: &str) -> Result<String, WiresearchError> {
        validate(raw)?;
        let tokens = self
            .tokenize(raw)
            .into_iter()
            .map(|token| self.canonicalize(token));
        Ok(self.join_with_implicit_and(tokens).join(" "))
    }

    /// Splits on whitespace. Spaces just inside parentheses are dropped, and a
    /// quoted region stays one token when phrases are protected.
    fn tokenize(&self, raw: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut in_quote = false;
        for ch in raw.chars() {
            if in_quote {
                if ch.is_ascii_whitespace() {
                    if !current.ends_with(' ') {
                        current.push(' ');
                    }
                } else {
                    current.push(ch);
                    if ch == '"' {
                        in_quote = false;
                    }
                }
                continue;
            }
            match ch {
                c if c.is_ascii_whitespace() => {
                    if !current.is_empty() && !current.chars().all(|c| c == '(') {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                ')' if current.is_empty() => match tokens.last_mut() {
                    Some(last) => last.push(ch),
                    None => current.push(ch),
                },
                '"' if self.protect_phrases => {
                    in_quote = true;
                    current.push(ch);
                }
                _ => current.push(ch),
            }
        }
        if in_quote {
            // Unterminated quote: the phrase runs to the end of the input.
            let trimmed = current.trim_end().len();
            current.truncate(trimmed);
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    fn canonicalize(&self, token: String) -> String {
        if !self.keywords_ignore_case {
            return token;
        }
        match Operator::from_keyword_ignore_case(&token) {
            Some(op) if op.is_active(self.extended_operators) => op.keyword().to_string(),
            _ => token,
        }
    }

    fn keyword(&self, token: &str) -> Option<Operator> {
        Operator::from_keyword(token).filter(|op| op.is_active(self.extended_operators))
    }

    /// Inserts `AND` between every pair of tokens, then folds the
    /// over-insertions `AND <op> AND` back into `<op>`.
    fn join_with_implicit_and<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let and = Operator::And.keyword();
        let mut out: Vec<String> = Vec::new();
        for token in tokens {
            if !out.is_empty() {
                self.push_repaired(&mut out, and.to_string());
            }
            self.push_repaired(&mut out, token);
        }
        out
    }

    fn push_repaired(&self, out: &mut Vec<String>, token: String) {
        out.push(token);
        while out.len() >= 3 {
            let n = out.len();
            let and = Operator::And.keyword();
            if out[n - 1] != and || out[n - 3] != and || self.keyword(&out[n - 2]).is_none() {
                break;
            }
            out.pop();
            let op = out.pop().unwrap_or_default();
            out.pop();
            out.push(op);
        }
    }
}

fn is_query_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '(' | ')' | '"' | '-') || ch.is_ascii_whitespace()
}

fn validate(raw: &str) -> Result<(), WiresearchError> {
    match raw.char_indices().find(|(_, ch)| !is_query_char(*ch)) {
        Some((position, ch)) => Err(WiresearchError::InvalidCharacter { ch, position }),
        None => Ok(()),
    }
}

/// Normalizes with the default configuration; invalid queries become `""`.
pub fn normalize(raw: &str) -> String {
    Normalizer::default().normalize(raw)
}

/// Normalizes with the default configuration, reporting invalid characters.
pub fn try_normalize(raw: &str) -> Result<String, WiresearchError> {
    Normalizer::default().try_normalize(raw)
}
