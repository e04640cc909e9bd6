//! Tokenizer
//! ---
//! Splits records into word tokens on a delimiter pattern.  The default pattern treats
//! every run of non-letter characters as a delimiter.

use std::borrow::Borrow;
use std::fmt;

use clap::ValueEnum;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

use crate::error::Result;

/// One or more non-letter characters.
pub const DEFAULT_PATTERN: &str = r"[^\p{L}]+";

/// A normalized word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Wraps an already normalized word.
    pub fn new<S: Into<String>>(word: S) -> Self {
        Token(word.into())
    }

    /// Returns the word
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the underlying String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for Token {
    fn from(word: &'a str) -> Self {
        Token::new(word)
    }
}

/// Case policy applied to every token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum CaseFold {
    /// Tokens keep the case they had in the record
    #[default]
    Preserve,

    /// Tokens are lowercased
    Lower,
}

impl CaseFold {
    fn apply(self, piece: &str) -> Token {
        match self {
            CaseFold::Preserve => Token::new(piece),
            CaseFold::Lower    => Token::new(piece.to_lowercase()),
        }
    }
}

/// Splits records into tokens.  The delimiter pattern and case policy are fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiter: Regex,
    fold: CaseFold,
}

impl Tokenizer {

    /// Creates a Tokenizer splitting on `pattern`.
    /// ```rust
    ///   use wordflow_count::tokenizer::{CaseFold, Tokenizer};
    ///
    ///   let t = Tokenizer::new(r"\s+", CaseFold::Lower).unwrap();
    ///   let words: Vec<String> = t.tokenize("Hi  there, Bob").map(|t| t.into_string()).collect();
    ///   assert_eq!(words, vec!["hi", "there,", "bob"]);
    /// ```
    pub fn new(pattern: &str, fold: CaseFold) -> Result<Self> {
        Ok(Tokenizer {
            delimiter: Regex::new(pattern)?,
            fold,
        })
    }

    /// The delimiter pattern
    pub fn pattern(&self) -> &str {
        self.delimiter.as_str()
    }

    /// The case policy
    pub fn fold(&self) -> CaseFold {
        self.fold
    }

    /// Lazily splits a record into tokens, left to right.  Empty pieces are dropped, so
    /// an empty record or one made only of delimiters yields nothing.
    /// ```rust
    ///   use wordflow_count::tokenizer::Tokenizer;
    ///
    ///   let t = Tokenizer::default();
    ///   assert_eq!(t.tokenize("hi sue bob").count(), 3);
    ///   assert_eq!(t.tokenize("  ...  ").count(), 0);
    /// ```
    pub fn tokenize<'t, 'r>(&'t self, record: &'r str) -> Tokens<'t, 'r> {
        Tokens {
            delimiter: &self.delimiter,
            fold: self.fold,
            record,
            pos: Some(0),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer {
            delimiter: Regex::new(DEFAULT_PATTERN).expect("default pattern compiles"),
            fold: CaseFold::Preserve,
        }
    }
}

/// Iterator over the tokens of one record.  Cloning it restarts from the same position.
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'r> {
    delimiter: &'t Regex,
    fold: CaseFold,
    record: &'r str,
    // None once the record is exhausted
    pos: Option<usize>,
}

impl<'t, 'r> Tokens<'t, 'r> {

    // Next delimiter at or after `from` that consumes at least one byte.
    fn next_delimiter(&self, from: usize) -> Option<(usize, usize)> {
        let mut search = from;
        while search <= self.record.len() {
            let m = self.delimiter.find_at(self.record, search)?;
            if m.end() > m.start() {
                return Some((m.start(), m.end()));
            }
            search = match self.record[m.end()..].chars().next() {
                Some(c) => m.end() + c.len_utf8(),
                None    => return None,
            };
        }
        None
    }
}

impl<'t, 'r> Iterator for Tokens<'t, 'r> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(start) = self.pos {
            let piece = match self.next_delimiter(start) {
                Some((end, next)) => {
                    self.pos = Some(next);
                    &self.record[start..end]
                },
                None => {
                    self.pos = None;
                    &self.record[start..]
                }
            };
            if !piece.is_empty() {
                return Some(self.fold.apply(piece));
            }
        }
        None
    }
}
