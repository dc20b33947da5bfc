use std::fmt;
use std::str::FromStr;

/// Float mode keeps two decimals, the `0.01` step of a currency input.
const FLOAT_STEPS_PER_UNIT: f64 = 100.0;

/// A cost or rate in the representation the user picked.
///
/// Serialized as a bare JSON number. `Integer(50)` is sent as `50`, `Float(50.0)` as `50.0`.
#[derive(Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize, Debug)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),
    Float(f64),
}

impl Amount {
    pub fn mode(&self) -> NumberMode {
        match self {
            Amount::Integer(_) => NumberMode::Integer,
            Amount::Float(_) => NumberMode::Float,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Amount::Integer(v) => v.fmt(f),
            Amount::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Numeric representation chosen for one form submission.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NumberMode {
    #[default]
    Float,
    Integer,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("'{0}' is not a whole number")]
    NotInteger(String),
    #[error("'{0}' is not a number")]
    NotNumber(String),
}

impl NumberMode {
    /// Parses form text into an amount of this representation.
    ///
    /// Float mode rounds to the nearest `0.01`. Integer mode never truncates a fraction.
    pub fn parse(&self, text: &str) -> Result<Amount, ParseAmountError> {
        let text = text.trim();
        match self {
            NumberMode::Integer => text
                .parse::<i64>()
                .map(Amount::Integer)
                .map_err(|_| ParseAmountError::NotInteger(text.to_string())),
            NumberMode::Float => {
                let value = text
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ParseAmountError::NotNumber(text.to_string()))?;
                // values too large to scale have no fractional digits left to snap.
                let scaled = value * FLOAT_STEPS_PER_UNIT;
                let snapped = if scaled.is_finite() {
                    scaled.round() / FLOAT_STEPS_PER_UNIT
                } else {
                    value
                };
                Ok(Amount::Float(snapped))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NumberMode::Integer => "int",
            NumberMode::Float => "float",
        }
    }
}

impl fmt::Display for NumberMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "integer" => Ok(NumberMode::Integer),
            "float" => Ok(NumberMode::Float),
            other => Err(format!("unknown number mode '{other}', expected 'float' or 'int'")),
        }
    }
}
