use crate::application::ApplicationResult;

pub trait CredentialVerifier: Send + Sync {
    /// Compare a candidate admin secret against the configured one.
    ///
    /// Returns `Configuration` when no secret is configured; never succeeds
    /// silently in that case.
    fn verify(&self, candidate: &str) -> ApplicationResult<bool>;
}
