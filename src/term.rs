//! Term module: decodes the raw text of a match instruction.

use std::fmt;

/// A decoded match term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term<'a> {
    /// The keyword with quote and negation markers removed.
    pub keyword: &'a str,
    /// Full equality instead of substring containment.
    pub exact: bool,
    /// `false` when the term is negated.
    pub include: bool,
}

impl<'a> Term<'a> {
    /// Decodes `"..."` (exact) and a leading `-` (negation).
    ///
    /// The quote test runs first, so `"-cat"` is a negated exact term. A negated
    /// quoted phrase (`-"new york"`) is also read as exact.
    pub fn decode(text: &'a str) -> Term<'a> {
        let mut exact = text.starts_with('"');
        let mut keyword = if exact { unquote(text) } else { text };
        let mut include = true;
        if let Some(rest) = keyword.strip_prefix('-') {
            include = false;
            keyword = rest;
            if !exact && keyword.starts_with('"') {
                exact = true;
                keyword = unquote(keyword);
            }
        }
        Term { keyword, exact, include }
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.include {
            f.write_str("-")?;
        }
        if self.exact {
            write!(f, "\"{}\"", self.keyword)
        } else {
            f.write_str(self.keyword)
        }
    }
}

/// Strips one leading and one trailing double quote, if present.
pub fn unquote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}
