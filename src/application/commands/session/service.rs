use std::sync::Arc;

use crate::application::ports::security::CredentialVerifier;

pub struct SessionCommandService {
    pub(super) verifier: Arc<dyn CredentialVerifier>,
}

impl SessionCommandService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }
}
