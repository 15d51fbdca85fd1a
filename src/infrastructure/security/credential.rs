use subtle::ConstantTimeEq;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::CredentialVerifier,
};

/// Checks the admin password against the value configured at startup.
#[derive(Clone)]
pub struct SharedSecretVerifier {
    secret: Option<String>,
}

impl SharedSecretVerifier {
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        Self { secret }
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, candidate: &str) -> ApplicationResult<bool> {
        let secret = self
            .secret
            .as_deref()
            .ok_or_else(|| ApplicationError::configuration("admin password is not configured"))?;
        Ok(bool::from(
            candidate.trim().as_bytes().ct_eq(secret.as_bytes()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sides_are_trimmed() {
        let verifier = SharedSecretVerifier::new(Some("  hunter2\n".into()));
        assert!(verifier.verify(" hunter2 ").unwrap());
        assert!(!verifier.verify("hunter3").unwrap());
        assert!(!verifier.verify("hunter").unwrap());
    }

    #[test]
    fn missing_or_blank_secret_is_a_configuration_error() {
        for secret in [None, Some("   ".to_owned())] {
            let verifier = SharedSecretVerifier::new(secret);
            assert!(matches!(
                verifier.verify("anything"),
                Err(ApplicationError::Configuration(_))
            ));
        }
    }
}
