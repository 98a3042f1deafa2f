//! Field delimiter selection for delimited text sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The closed set of delimiters an operator can pick for a text source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
    Pipe,
    Semicolon,
    Space,
}

impl Delimiter {
    pub const ALL: [Delimiter; 5] = [
        Delimiter::Tab,
        Delimiter::Comma,
        Delimiter::Pipe,
        Delimiter::Semicolon,
        Delimiter::Space,
    ];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
            Delimiter::Space => ' ',
        }
    }

    pub fn as_byte(self) -> u8 {
        // Every variant is a single ASCII character.
        self.as_char() as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
            Delimiter::Pipe => "pipe",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Space => "space",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Delimiter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Delimiter::ALL
            .into_iter()
            .find(|delimiter| delimiter.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownDelimiter(s.to_string()))
    }
}
