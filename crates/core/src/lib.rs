//! Mercadito Core - Shared types library.
//!
//! This crate provides common types used across all Mercadito components:
//! - `auth` - Credential store, session manager, and password hashing
//! - `cli` - Command-line shell around the auth module
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, emails, phone numbers,
//!   and the account-type enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
