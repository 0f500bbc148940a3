//! Seed demo accounts.

use tracing::info;

use mercadito_auth::{AuthService, DEMO_PASSWORD, seed_demo_users};

use super::user_message;

/// Create the demo accounts, unless a previous run already did.
///
/// # Errors
///
/// Returns the displayed message when seeding fails.
pub async fn demo_accounts(service: &AuthService) -> Result<(), Box<dyn std::error::Error>> {
    let created = seed_demo_users(service)
        .await
        .map_err(|e| user_message(&e))?;

    if created == 0 {
        info!("Demo accounts already initialized; nothing to do.");
        return Ok(());
    }

    info!("Created {created} demo account(s). All use the password {DEMO_PASSWORD}");
    for user in service.users().list().map_err(|e| user_message(&e.into()))? {
        info!("  {} <{}> ({})", user.display_name, user.email, user.user_type);
    }
    Ok(())
}
