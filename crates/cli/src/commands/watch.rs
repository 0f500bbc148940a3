//! Follow the session slot.
//!
//! The session can be cleared by another process sharing the data directory
//! (the "second tab"). A surface that depends on an active login must re-check
//! rather than cache, so this command polls `current_user()` and reacts when
//! the slot changes, the way a protected page would redirect to login.

use std::time::Duration;

use tracing::info;

use mercadito_auth::AuthService;

/// How often the session slot is re-checked.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Watch the active session until it ends or Ctrl+C.
///
/// # Errors
///
/// Returns an error when no session is active to begin with.
pub async fn session(service: &AuthService) -> Result<(), Box<dyn std::error::Error>> {
    let Ok(Some(initial)) = service.current_user() else {
        return Err("not logged in; run `mercadito login` first".into());
    };

    info!(
        "Watching session for {} <{}>. Press Ctrl+C to stop.",
        initial.display_name, initial.email
    );

    let mut current_id = initial.id;
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Stopped watching.");
                return Ok(());
            }
        }

        // Always re-read the slot; a cached value would miss the other tab.
        match service.current_user() {
            Ok(Some(user)) if user.id == current_id => {}
            Ok(Some(user)) => {
                info!("Session replaced: now {} <{}>.", user.display_name, user.email);
                current_id = user.id;
            }
            Ok(None) => {
                info!("Session ended elsewhere; redirecting to login.");
                return Ok(());
            }
            Err(err) => {
                // A transient storage fault is not a logout; keep watching.
                tracing::warn!("Could not read session slot: {err}");
            }
        }
    }
}
