//! PersonType: the legal nature of a member.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legal-person kind of a member.
///
/// The kind decides which identifier scheme applies (11-digit CPF for
/// individuals, 14-digit CNPJ for organizations) and which business rules
/// apply to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonType {
    /// Natural person, identified by a CPF.
    #[serde(rename = "PF")]
    Individual,

    /// Legal entity, identified by a CNPJ.
    #[serde(rename = "PJ")]
    Organization,
}

impl PersonType {
    /// Short code used on the wire and in storage.
    pub fn code(self) -> &'static str {
        match self {
            Self::Individual => "PF",
            Self::Organization => "PJ",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Organization => "Organization",
        }
    }

    /// Name of the identifier scheme for this kind.
    pub fn identifier_label(self) -> &'static str {
        match self {
            Self::Individual => "CPF",
            Self::Organization => "CNPJ",
        }
    }

    /// Number of digits in a canonical identifier of this kind.
    pub fn identifier_len(self) -> usize {
        match self {
            Self::Individual => 11,
            Self::Organization => 14,
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a person-type string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown person type '{0}', expected PF or PJ")]
pub struct UnknownPersonType(pub String);

impl FromStr for PersonType {
    type Err = UnknownPersonType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pf" | "individual" => Ok(Self::Individual),
            "pj" | "organization" => Ok(Self::Organization),
            _ => Err(UnknownPersonType(s.to_string())),
        }
    }
}
