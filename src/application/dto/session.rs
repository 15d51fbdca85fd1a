use crate::application::error::{ApplicationError, ApplicationResult};

/// Marker value carried by a valid admin session cookie.
pub const SESSION_SENTINEL: &str = "authenticated";

/// Whether the current caller holds a valid admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Anonymous,
}

impl SessionState {
    /// Interpret a raw session marker value.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(SESSION_SENTINEL) => Self::Authenticated,
            _ => Self::Anonymous,
        }
    }

    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    pub fn ensure_authenticated(self) -> ApplicationResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("admin session required"))
        }
    }
}
