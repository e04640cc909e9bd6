use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::counts::CountMap;
use crate::tokenizer::Token;

/// A rendered `"<token>: <count>"` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormattedEntry(String);

impl FormattedEntry {
    /// The rendered line
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the underlying String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'a> PartialEq<&'a str> for FormattedEntry {
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == *other
    }
}

/// Renders one (token, count) pair.  The token is written verbatim.
/// ```rust
///   use wordflow_count::format::format_entry;
///   use wordflow_count::tokenizer::Token;
///
///   assert_eq!(format_entry(&Token::from("hi"), 5), "hi: 5");
/// ```
pub fn format_entry(token: &Token, count: u64) -> FormattedEntry {
    FormattedEntry(format!("{}: {}", token, count))
}

/// Renders every entry of a CountMap, in no particular order
pub fn format_counts(counts: &CountMap) -> Vec<FormattedEntry> {
    counts.iter().map(|(token, count)| format_entry(token, count)).collect()
}
