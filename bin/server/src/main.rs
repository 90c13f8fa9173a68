mod config;
mod db;
mod error;
mod extract;
mod routes;
mod state;

use smartstay_account::{MemoryUserStore, TokenSigner, UserStore};
use smartstay_assist::ChatClient;
use smartstay_booking::{BookingStore, MemoryBookingStore};
use smartstay_catalog::{HotelStore, MemoryHotelStore};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // Postgres when DATABASE_URL is set, in-memory stores otherwise
    let (hotels, users, bookings): (
        Arc<dyn HotelStore>,
        Arc<dyn UserStore>,
        Arc<dyn BookingStore>,
    ) = match &config.database_url {
        Some(database_url) => {
            let db_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
                .expect("failed to connect to database");

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&db_pool)
                .await
                .expect("failed to run migrations");

            (
                Arc::new(db::PgHotelStore::new(db_pool.clone())),
                Arc::new(db::PgUserStore::new(db_pool.clone())),
                Arc::new(db::PgBookingStore::new(db_pool)),
            )
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory stores");
            (
                Arc::new(MemoryHotelStore::new()),
                Arc::new(MemoryUserStore::new()),
                Arc::new(MemoryBookingStore::new()),
            )
        }
    };

    // Chat goes live only when a key is configured
    let assist = match config.assist_api_key() {
        Some(api_key) => Some(ChatClient::new(
            api_key,
            config.assist_model(),
            config.assist_base_url(),
        )),
        None => {
            tracing::info!("No assist API key configured, chat replies offline");
            None
        }
    };

    let signer = TokenSigner::new(config.auth.token_secret.as_str());
    let app_state = Arc::new(AppState::new(
        hotels,
        users,
        bookings,
        signer,
        config.token_ttl(),
        assist,
    ));

    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
