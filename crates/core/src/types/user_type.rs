//! Account type enum.

use serde::{Deserialize, Serialize};

/// Account type chosen at registration.
///
/// Buyers browse and purchase; sellers additionally carry business details
/// (business name, tax id) on their record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// A regular customer account.
    Buyer,
    /// A merchant account with optional business details.
    Seller,
}

impl UserType {
    /// Whether this account type carries business details.
    #[must_use]
    pub const fn is_seller(self) -> bool {
        matches!(self, Self::Seller)
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buyer => write!(f, "buyer"),
            Self::Seller => write!(f, "seller"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            _ => Err(format!("invalid user type: {s}")),
        }
    }
}
