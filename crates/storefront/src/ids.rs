//! Sequential record identifiers.
//!
//! Every record type is numbered from 1 and rendered as a one-letter prefix
//! followed by a zero-padded sequence, e.g. `P001` or `O00042`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("expected prefix '{expected}' in '{input}'")]
    WrongPrefix { expected: char, input: String },
    #[error("invalid sequence number in '{0}'")]
    InvalidSequence(String),
}

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $width:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            pub const PREFIX: char = $prefix;

            /// Creates an id from a 1-based sequence number.
            pub const fn new(sequence: u32) -> Self {
                Self(sequence)
            }

            /// Id of the record at zero-based position `index`.
            pub const fn from_index(index: usize) -> Self {
                Self(index as u32 + 1)
            }

            pub const fn sequence(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{:0width$}", $prefix, self.0, width = $width)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix($prefix).ok_or_else(|| ParseIdError::WrongPrefix {
                    expected: $prefix,
                    input: s.to_string(),
                })?;

                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseIdError::InvalidSequence(s.to_string()));
                }

                match digits.parse::<u32>() {
                    Ok(0) | Err(_) => Err(ParseIdError::InvalidSequence(s.to_string())),
                    Ok(sequence) => Ok(Self(sequence)),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

sequential_id!(
    /// Product identifier, rendered `P001`.
    ProductId, 'P', 3
);
sequential_id!(
    /// Customer identifier, rendered `C0001`.
    CustomerId, 'C', 4
);
sequential_id!(
    /// Marketing campaign identifier, rendered `M01`.
    CampaignId, 'M', 2
);
sequential_id!(
    /// Order identifier, rendered `O00001`.
    OrderId, 'O', 5
);
sequential_id!(
    /// Return identifier, rendered `R0001`.
    ReturnId, 'R', 4
);
