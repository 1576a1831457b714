//! Collabhub application composition root
//!
//! Selects the entity stores, builds domain states and composes the domain
//! routers into a single application.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use collabhub_accounts::{
    AccountStore, AccountsState, CategoryCache, IdentityResolver, InMemoryAccountStore,
    PgAccountStore,
};
use collabhub_auth::{AuthBackend, AuthConfig};
use collabhub_campaigns::{
    CampaignService, CampaignStore, CampaignsState, DiscoveryService, InMemoryCampaignStore,
    PgCampaignStore,
};
use collabhub_common::{Config, StoreBackend};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

/// Maximum accepted request body size
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Entity stores shared by every domain
#[derive(Clone)]
pub struct Stores {
    pub accounts: Arc<dyn AccountStore>,
    pub campaigns: Arc<dyn CampaignStore>,
}

impl Stores {
    /// Fresh in-memory stores, as used by the `memory` backend
    pub fn in_memory() -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountStore::new()),
            campaigns: Arc::new(InMemoryCampaignStore::new()),
        }
    }

    /// PostgreSQL-backed stores; the campaign store inspects the schema for
    /// its capabilities once here.
    pub async fn postgres(pool: PgPool) -> anyhow::Result<Self> {
        let campaigns = PgCampaignStore::connect(pool.clone()).await?;
        Ok(Self {
            accounts: Arc::new(PgAccountStore::new(pool)),
            campaigns: Arc::new(campaigns),
        })
    }
}

/// Build the stores selected by `STORE_BACKEND`, migrating PostgreSQL first
pub async fn build_stores(config: &Config) -> anyhow::Result<Stores> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory stores; data is lost on shutdown");
            Ok(Stores::in_memory())
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?;
            let pool = PgPool::connect(database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
            tracing::info!("Database connection established");

            run_migrations(&pool).await?;
            Stores::postgres(pool).await
        }
    }
}

/// Apply pending schema migrations
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Create the main application router with all routes
pub fn create_app(config: &Config, stores: Stores) -> Router {
    let auth = AuthBackend::new(AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    });

    let identity = IdentityResolver::new(Arc::clone(&stores.accounts));
    let categories = Arc::new(CategoryCache::new(
        Arc::clone(&stores.accounts),
        config.category_cache_ttl(),
    ));

    let accounts_state = AccountsState {
        identity: identity.clone(),
        categories,
        auth: auth.clone(),
    };

    let campaigns_state = CampaignsState {
        campaigns: CampaignService::new(
            Arc::clone(&stores.accounts),
            Arc::clone(&stores.campaigns),
        ),
        discovery: DiscoveryService::new(Arc::clone(&stores.campaigns)),
        identity,
        auth,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Collabhub API v0.0.1-SNAPSHOT" }),
        )
        .merge(collabhub_accounts::routes().with_state(accounts_state))
        .merge(collabhub_campaigns::routes().with_state(campaigns_state))
}

/// CORS for a comma-separated origin list; `*` allows any origin
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let allow_origin = if origins.trim() == "*" {
        AllowOrigin::any()
    } else {
        let list: Vec<HeaderValue> = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

/// Reject request bodies over `MAX_BODY_BYTES`
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
