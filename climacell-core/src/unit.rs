use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Measurement system the API uses for values in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Si,
    Us,
}

impl Unit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Si => "si",
            Unit::Us => "us",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Si, Unit::Us]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit system '{0}'. Supported unit systems: si, us.")]
pub struct UnknownUnit(pub String);

impl TryFrom<&str> for Unit {
    type Error = UnknownUnit;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "si" => Ok(Unit::Si),
            "us" => Ok(Unit::Us),
            _ => Err(UnknownUnit(value.to_string())),
        }
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::try_from(s)
    }
}
