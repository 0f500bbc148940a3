//! Session record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mercadito_core::{Email, Phone, UserId, UserType};

/// Sanitized user record persisted as the active login.
///
/// Identical to [`super::UserRecord`] with the password digest omitted. The
/// digest must never reach the session slot, so this type simply has no field
/// for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Opaque unique id of the logged-in user.
    pub id: UserId,
    /// The user's full name.
    pub display_name: String,
    /// Lower-cased email.
    pub email: Email,
    /// Chilean mobile number.
    pub phone: Phone,
    /// Buyer or seller.
    pub user_type: UserType,
    /// Business name; sellers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Tax id; sellers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
