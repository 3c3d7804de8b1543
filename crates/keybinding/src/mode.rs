//! Applicability modes for menu entries and key mappings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Editor context in which a menu entry or key mapping is active.
///
/// Invalid mode names are rejected where untyped input enters the system
/// (string parsing, deserialization); a constructed `Mode` is always one of
/// the four values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Active in every editor mode.
    All,
    /// Normal mode only.
    #[default]
    Normal,
    /// Visual mode only.
    Visual,
    /// Insert mode only.
    Insert,
}

impl Mode {
    /// Literal token embedded in menu and map definition commands.
    pub fn token(self) -> &'static str {
        match self {
            Self::All => "A",
            Self::Normal => "N",
            Self::Visual => "V",
            Self::Insert => "I",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "normal" => Ok(Self::Normal),
            "visual" => Ok(Self::Visual),
            "insert" => Ok(Self::Insert),
            _ => Err(Error::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Normal => "normal",
            Self::Visual => "visual",
            Self::Insert => "insert",
        };
        f.write_str(name)
    }
}
