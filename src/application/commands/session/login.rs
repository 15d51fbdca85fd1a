use super::SessionCommandService;
use crate::application::{
    dto::SessionState,
    error::{ApplicationError, ApplicationResult},
};

pub struct LoginCommand {
    pub password: String,
}

impl SessionCommandService {
    /// Check the admin secret. On success the caller issues the session marker.
    ///
    /// Blank input fails with `Validation`, a missing secret with
    /// `Configuration` and a mismatch with `Unauthorized`.
    pub fn login(&self, command: &LoginCommand) -> ApplicationResult<SessionState> {
        if command.password.trim().is_empty() {
            return Err(ApplicationError::validation("password is required"));
        }

        if self.verifier.verify(&command.password)? {
            tracing::info!("admin session issued");
            Ok(SessionState::Authenticated)
        } else {
            tracing::warn!("admin login rejected");
            Err(ApplicationError::unauthorized("invalid password"))
        }
    }
}
