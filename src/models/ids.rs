//! Strongly-typed ID wrapper for expenses

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Unique identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form shown in listings ("exp-" + first 8 hex digits)
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }

    /// Check whether a user-supplied identifier refers to this ID
    ///
    /// Accepts the full UUID or the short form, with or without the prefix.
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        if let Ok(uuid) = Uuid::parse_str(identifier) {
            return uuid == self.0;
        }
        let bare = identifier.strip_prefix(DISPLAY_PREFIX).unwrap_or(identifier);
        bare.len() >= 8 && self.0.simple().to_string().starts_with(&bare.to_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
