//! User record types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use mercadito_core::{Email, Phone, UserId, UserType};

use super::SessionRecord;

/// A registered user as persisted in the `users` slot.
///
/// Created by registration, never mutated, never deleted. The password is
/// present only as an Argon2 digest; call [`UserRecord::sanitize`] before a
/// record leaves the module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque unique id, assigned at creation.
    pub id: UserId,
    /// The user's full name as entered (trimmed).
    pub display_name: String,
    /// Lower-cased email; unique across the collection.
    pub email: Email,
    /// Argon2 digest of the password, PHC string format.
    pub password_hash: String,
    /// Chilean mobile number as entered (trimmed).
    pub phone: Phone,
    /// Buyer or seller.
    pub user_type: UserType,
    /// Business name; sellers only, optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Tax id; sellers only, optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// A copy of this record with the password digest removed.
    #[must_use]
    pub fn sanitize(&self) -> SessionRecord {
        SessionRecord {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            user_type: self.user_type,
            business_name: self.business_name.clone(),
            tax_id: self.tax_id.clone(),
            created_at: self.created_at,
        }
    }
}

/// Raw registration input, prior to validation.
///
/// Free-text fields arrive as typed into the form; the registration flow
/// trims them and validates shapes before anything is persisted. The secret
/// and its confirmation are wrapped in [`SecretString`] so they never show up
/// in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Full name.
    pub display_name: String,
    /// Email address, any case.
    pub email: String,
    /// The chosen password.
    pub secret: SecretString,
    /// The password typed a second time.
    pub secret_confirmation: SecretString,
    /// Chilean mobile number.
    pub phone: String,
    /// Buyer or seller.
    pub user_type: UserType,
    /// Business name; sellers only.
    pub business_name: Option<String>,
    /// Tax id; sellers only.
    pub tax_id: Option<String>,
}
