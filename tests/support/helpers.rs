// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryPostStore, RecordingInvalidator, ScriptedCompletion};
use axum::body::{self, Body};
use axum::http::Response;
use inkpress::application::generation::GenerationSettings;
use inkpress::application::ports::completion::CompletionClient;
use inkpress::application::services::{ApplicationServices, ServiceDependencies};
use inkpress::infrastructure::{security::SharedSecretVerifier, util::DefaultSlugGenerator};
use inkpress::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

pub const ADMIN_PASSWORD: &str = "correct horse";
pub const ADMIN_COOKIE: &str = "admin-auth=authenticated";

/// Service graph over in-memory ports, with handles kept for assertions.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryPostStore>,
    pub views: Arc<RecordingInvalidator>,
}

pub fn build_context(completion: Arc<dyn CompletionClient>) -> TestContext {
    build_context_with_password(completion, Some(ADMIN_PASSWORD))
}

pub fn build_context_with_password(
    completion: Arc<dyn CompletionClient>,
    password: Option<&str>,
) -> TestContext {
    let store = Arc::new(InMemoryPostStore::default());
    let views = Arc::new(RecordingInvalidator::default());

    let services = Arc::new(ApplicationServices::new(
        ServiceDependencies {
            post_write_repo: store.clone(),
            post_read_repo: store.clone(),
            completion,
            credentials: Arc::new(SharedSecretVerifier::new(password.map(str::to_owned))),
            views: views.clone(),
            clock: Arc::new(FixedClock::default()),
            slugger: Arc::new(DefaultSlugGenerator),
        },
        GenerationSettings::new("test-model", true),
    ));

    TestContext {
        services,
        store,
        views,
    }
}

pub fn make_test_router(ctx: &TestContext) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&ctx.services),
        secure_cookies: false,
    };
    build_router(state, &[])
}

/// Router backed by a completion client that always answers `reply`.
pub fn make_router_with_reply(reply: &str) -> (axum::Router, TestContext) {
    let ctx = build_context(Arc::new(ScriptedCompletion::always(reply)));
    (make_test_router(&ctx), ctx)
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(axum::http::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
