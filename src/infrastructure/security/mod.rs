pub mod credential;

pub use credential::SharedSecretVerifier;
