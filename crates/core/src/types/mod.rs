//! Core types for Mercadito.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod phone;
pub mod user_type;

pub use email::{Email, EmailError};
pub use id::UserId;
pub use phone::{Phone, PhoneError};
pub use user_type::UserType;
