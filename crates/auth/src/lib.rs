//! Mercadito Auth - credential store and session manager.
//!
//! This crate owns the account data for the Mercadito demo marketplace:
//! registering unique-email users, hashing their passwords, verifying
//! credentials on login, and tracking the single active session.
//!
//! # Architecture
//!
//! Everything persists through an injected [`StorageBackend`]: a durable
//! key-value store with one JSON document per [`Slot`], mirroring
//! origin-scoped browser storage. The backend is constructed once at startup
//! and shared by the components; there is no module-level global state.
//!
//! - [`AuthService`] - composition root wiring validators, the user store,
//!   the password hasher, and the session manager
//! - [`UserStore`] - the persisted user collection (list / find / append)
//! - [`SessionManager`] - the single sanitized "current user" slot
//! - [`password`] - Argon2id hashing and verification
//! - [`validate`] - pure field validators for registration input
//! - [`seed`] - optional demo-account bootstrap, guarded by a one-time flag
//!
//! # Storage layout
//!
//! - `users` - JSON array of user records, insertion order
//! - `currentUser` - JSON object of the sanitized active login, or absent
//! - `demoUsersInitialized` - flag guarding demo seeding
//!
//! # Known limitation
//!
//! Every mutation of the user collection is a whole-slot read-modify-write
//! with no locking. Two near-simultaneous registrations through independent
//! handles can race and silently drop one. Acceptable for the single-user
//! demo scope; callers that need more must serialize writes themselves.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod models;
pub mod password;
pub mod seed;
pub mod service;
pub mod session;
pub mod storage;
pub mod users;
pub mod validate;

pub use error::AuthError;
pub use models::{NewUser, SessionRecord, UserRecord};
pub use seed::{DEMO_PASSWORD, seed_demo_users};
pub use service::AuthService;
pub use session::SessionManager;
pub use storage::{
    ChangeKind, FileStorage, MemoryStorage, Slot, StorageBackend, StorageError, StorageEvent,
};
pub use users::UserStore;
pub use validate::ValidationError;
