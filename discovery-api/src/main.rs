use discovery_api::{
    app_state::AppState,
    config::read_config,
    domain::suggestions::{
        repository::PgSearchQueryRepository, SearchQueryRepository, SuggestionService,
        TextSearchLanguage,
    },
    router,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discovery_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = read_config().expect("Failed to read configuration");
    let language = TextSearchLanguage::resolve(settings.suggestions.language.as_deref())
        .expect("Invalid suggestions language");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy_with(settings.database.with_db());

    let repository = PgSearchQueryRepository::new(pool, language);
    repository
        .initialize()
        .await
        .expect("Failed to initialize the search query store");

    let app_state = AppState::new(SuggestionService::with_defaults(repository));
    let app = router::create(app_state);

    let address = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
