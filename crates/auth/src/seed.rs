//! Demo account seeding.
//!
//! Optional bootstrap that creates sample accounts so the demo is usable on
//! first run. Guarded by the `demoUsersInitialized` flag, so repeated
//! application loads do not re-seed or overwrite existing data. Seeding is
//! deliberately decoupled from the store itself: skipping it changes nothing
//! about credential or session behavior.

use secrecy::SecretString;

use mercadito_core::UserType;

use crate::error::AuthError;
use crate::models::NewUser;
use crate::service::AuthService;
use crate::storage::Slot;

/// Password shared by all demo accounts.
pub const DEMO_PASSWORD: &str = "Test123!";

/// A sample account created on first run.
struct DemoUser {
    display_name: &'static str,
    email: &'static str,
    phone: &'static str,
    user_type: UserType,
    business_name: Option<&'static str>,
    tax_id: Option<&'static str>,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        display_name: "María González",
        email: "comprador1@test.com",
        phone: "+56 9 8765 4321",
        user_type: UserType::Buyer,
        business_name: None,
        tax_id: None,
    },
    DemoUser {
        display_name: "Carlos Ramírez",
        email: "comprador2@test.com",
        phone: "+56 9 7654 3210",
        user_type: UserType::Buyer,
        business_name: None,
        tax_id: None,
    },
    DemoUser {
        display_name: "Roberto Silva",
        email: "vendedor1@test.com",
        phone: "+56 9 5432 1098",
        user_type: UserType::Seller,
        business_name: Some("Ferretería Silva"),
        tax_id: Some("76543210"),
    },
    DemoUser {
        display_name: "Patricia López",
        email: "vendedor2@test.com",
        phone: "+56 9 4321 0987",
        user_type: UserType::Seller,
        business_name: Some("Tienda Patricia"),
        tax_id: None,
    },
];

/// Create the demo accounts unless the guard flag is already set.
///
/// Each demo secret goes through the regular registration flow, so the stored
/// digests are real Argon2 hashes that verify against [`DEMO_PASSWORD`].
/// Returns the number of accounts created (0 when already initialized).
///
/// # Errors
///
/// Returns an [`AuthError`] if registration or the guard flag write fails.
pub async fn seed_demo_users(service: &AuthService) -> Result<usize, AuthError> {
    let storage = service.storage();
    if storage.read(Slot::DemoUsersInitialized)?.is_some() {
        tracing::debug!("demo accounts already initialized, skipping seed");
        return Ok(0);
    }

    let mut created = 0;
    for demo in DEMO_USERS {
        let input = NewUser {
            display_name: demo.display_name.to_owned(),
            email: demo.email.to_owned(),
            secret: SecretString::from(DEMO_PASSWORD),
            secret_confirmation: SecretString::from(DEMO_PASSWORD),
            phone: demo.phone.to_owned(),
            user_type: demo.user_type,
            business_name: demo.business_name.map(str::to_owned),
            tax_id: demo.tax_id.map(str::to_owned),
        };
        match service.register(input).await {
            Ok(_) => created += 1,
            // A pre-existing account keeps its data; the seed never overwrites.
            Err(AuthError::EmailTaken) => {
                tracing::debug!(email = demo.email, "demo account already registered");
            }
            Err(err) => return Err(err),
        }
    }

    storage.write(Slot::DemoUsersInitialized, "true")?;
    tracing::info!(created, password = DEMO_PASSWORD, "seeded demo accounts");
    Ok(created)
}
