//! Real-valued literals that keep their source spelling.
//!
//! Generated harnesses quote numbers exactly as they appeared in the experiment description or in the reference
//! generator's output, so a `Real` carries both the parsed value (for validation) and the original text (for
//! emission).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// A real number plus the text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Real {
    value: f64,
    text: String,
}

impl Real {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<f64> for Real {
    /// Spell a computed value in shortest round-trip form (`4.0`, `0.001`, `1e-20`).
    fn from(value: f64) -> Self {
        Self {
            value,
            text: format!("{value:?}"),
        }
    }
}

/// Error returned when a line of text is not a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a real number")]
pub struct ParseRealError(pub String);

impl FromStr for Real {
    type Err = ParseRealError;

    /// Surrounding whitespace is ignored; the trimmed text is kept verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let value = text.parse::<f64>().map_err(|_| ParseRealError(text.to_string()))?;
        Ok(Self {
            value,
            text: text.to_string(),
        })
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Real {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = serde_json::Number::deserialize(deserializer)?;
        let value = number
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom(format!("number {number} is not representable as f64")))?;
        Ok(Self {
            value,
            text: number.to_string(),
        })
    }
}
