use inkpress::application::{
    generation::GenerationSettings,
    ports::{
        completion::CompletionClient, security::CredentialVerifier, time::Clock,
        util::SlugGenerator, views::ViewInvalidator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use inkpress::config::AppConfig;
use inkpress::domain::post::{PostReadRepository, PostWriteRepository};
use inkpress::infrastructure::{
    completion::HttpCompletionClient,
    database,
    repositories::{PostgresPostReadRepository, PostgresPostWriteRepository},
    security::SharedSecretVerifier,
    time::SystemClock,
    util::DefaultSlugGenerator,
    views::LoggingViewInvalidator,
};
use inkpress::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool));

    let completion_client = HttpCompletionClient::new(
        config.completion_api_url().clone(),
        config.completion_api_key().map(str::to_owned),
    )?;
    if !completion_client.has_api_key() {
        tracing::warn!("no completion API key configured; AI features will report a configuration error");
    }
    let completion: Arc<dyn CompletionClient> = Arc::new(completion_client);

    if config.admin_password().is_none() {
        tracing::warn!("ADMIN_PASSWORD is not set; admin login is disabled");
    }
    let credentials: Arc<dyn CredentialVerifier> = Arc::new(SharedSecretVerifier::new(
        config.admin_password().map(str::to_owned),
    ));

    let views: Arc<dyn ViewInvalidator> = Arc::new(LoggingViewInvalidator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        ServiceDependencies {
            post_write_repo,
            post_read_repo,
            completion,
            credentials,
            views,
            clock,
            slugger,
        },
        GenerationSettings::new(config.completion_model(), !config.is_production()),
    ));

    let state = HttpState {
        services,
        secure_cookies: config.is_production(),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
