//! Label colour palette shared by the board and the reconciliation engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Colour of a Trello label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColour {
    Green,
    Blue,
    Orange,
    Purple,
    Red,
    Yellow,
}

impl LabelColour {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelColour::Green => "green",
            LabelColour::Blue => "blue",
            LabelColour::Orange => "orange",
            LabelColour::Purple => "purple",
            LabelColour::Red => "red",
            LabelColour::Yellow => "yellow",
        }
    }

    /// Parse a colour name as Trello reports it (e.g. "purple")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "green" => Some(LabelColour::Green),
            "blue" => Some(LabelColour::Blue),
            "orange" => Some(LabelColour::Orange),
            "purple" => Some(LabelColour::Purple),
            "red" => Some(LabelColour::Red),
            "yellow" => Some(LabelColour::Yellow),
            _ => None,
        }
    }

    pub fn all() -> &'static [LabelColour] {
        &[
            LabelColour::Green,
            LabelColour::Blue,
            LabelColour::Orange,
            LabelColour::Purple,
            LabelColour::Red,
            LabelColour::Yellow,
        ]
    }
}

impl fmt::Display for LabelColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
