use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, session::SessionCommandService},
        generation::{ContentGenerationService, GenerationSettings},
        ports::{
            completion::CompletionClient, security::CredentialVerifier, time::Clock,
            util::SlugGenerator, views::ViewInvalidator,
        },
        queries::posts::PostQueryService,
    },
    domain::post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
};

/// Ports the service graph is assembled from.
pub struct ServiceDependencies {
    pub post_write_repo: Arc<dyn PostWriteRepository>,
    pub post_read_repo: Arc<dyn PostReadRepository>,
    pub completion: Arc<dyn CompletionClient>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub views: Arc<dyn ViewInvalidator>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub session_commands: Arc<SessionCommandService>,
    pub generation: Arc<ContentGenerationService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies, settings: GenerationSettings) -> Self {
        let ServiceDependencies {
            post_write_repo,
            post_read_repo,
            completion,
            credentials,
            views,
            clock,
            slugger,
        } = deps;

        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            Arc::clone(&views),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_service),
        ));

        let session_commands = Arc::new(SessionCommandService::new(credentials));

        let generation = Arc::new(ContentGenerationService::new(
            completion,
            post_read_repo,
            post_write_repo,
            views,
            clock,
            settings,
        ));

        Self {
            post_commands,
            post_queries,
            session_commands,
            generation,
        }
    }
}
