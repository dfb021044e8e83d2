use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar element of the `data`, `numbers`, or `alphabets` arrays.
///
/// The endpoint mixes strings and JSON numbers freely, so the token keeps
/// whichever representation arrived and renders it without quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => f.write_str(text),
            Token::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Comma-joined rendering used by the filtered result lines.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Response body of the filter endpoint.
///
/// Fields the endpoint omits decode to empty sections rather than failing
/// when the result is rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterResponse {
    #[serde(default)]
    pub numbers: Vec<Token>,
    #[serde(default)]
    pub alphabets: Vec<Token>,
    #[serde(default)]
    pub highest_alphabet: Option<Token>,
}
