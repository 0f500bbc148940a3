//! Account and session commands.

use secrecy::SecretString;
use tracing::info;

use mercadito_auth::{AuthService, NewUser};

use super::user_message;
use crate::RegisterArgs;

/// Register a new account and report the result.
///
/// # Errors
///
/// Returns the displayed message when validation, the uniqueness check, or
/// storage rejects the registration.
pub async fn register(
    service: &AuthService,
    args: RegisterArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = SecretString::from(args.password);
    let confirmation = args
        .confirm_password
        .map_or_else(|| password.clone(), SecretString::from);

    let input = NewUser {
        display_name: args.name,
        email: args.email,
        secret: password,
        secret_confirmation: confirmation,
        phone: args.phone,
        user_type: args.user_type,
        business_name: args.business_name,
        tax_id: args.tax_id,
    };

    let record = service
        .register(input)
        .await
        .map_err(|e| user_message(&e))?;

    info!(
        "Registered {} ({}). You can now log in.",
        record.email, record.user_type
    );
    Ok(())
}

/// Log in and persist the session.
///
/// # Errors
///
/// Returns the displayed message when the credentials are rejected or the
/// session cannot be persisted.
pub async fn login(
    service: &AuthService,
    email: &str,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let secret = SecretString::from(password);
    let session = service
        .login(email, &secret)
        .await
        .map_err(|e| user_message(&e))?;

    info!("Welcome back, {}!", session.display_name);
    Ok(())
}

/// Close the active session. Requires explicit confirmation.
///
/// # Errors
///
/// Returns an error when the logout is not confirmed or the slot cannot be
/// removed.
pub fn logout(service: &AuthService, confirmed: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !confirmed {
        return Err("logout not confirmed; re-run with --yes to close the session".into());
    }

    service
        .logout()
        .map_err(|e| user_message(&e.into()))?;
    info!("Session closed.");
    Ok(())
}

/// Render the profile of the active session.
///
/// # Errors
///
/// Returns an error when no session is active (the caller should log in
/// first) or the slot cannot be read.
pub fn whoami(service: &AuthService) -> Result<(), Box<dyn std::error::Error>> {
    let Some(user) = service.current_user().map_err(|e| user_message(&e.into()))? else {
        return Err("not logged in; run `mercadito login` first".into());
    };

    info!("Name:      {}", user.display_name);
    info!("Email:     {}", user.email);
    info!("Phone:     {}", user.phone);
    info!("Type:      {}", user.user_type);
    if let Some(business) = &user.business_name {
        info!("Business:  {business}");
    }
    if let Some(tax_id) = &user.tax_id {
        info!("Tax id:    {tax_id}");
    }
    info!("Member since {}", user.created_at.format("%Y-%m-%d"));
    Ok(())
}

/// List registered accounts. Digests are never displayed.
///
/// # Errors
///
/// Returns an error when the user slot cannot be read.
pub fn users(service: &AuthService) -> Result<(), Box<dyn std::error::Error>> {
    let users = service
        .users()
        .list()
        .map_err(|e| user_message(&e.into()))?;

    if users.is_empty() {
        info!("No accounts registered yet. Try `mercadito seed`.");
        return Ok(());
    }

    for user in &users {
        info!("{} <{}> ({})", user.display_name, user.email, user.user_type);
    }
    info!("{} account(s).", users.len());
    Ok(())
}
