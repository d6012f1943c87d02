use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use product_catalog_server::adapter::handler::error::expose_error_details;
use product_catalog_server::adapter::handler::{self, AppState};
use product_catalog_server::adapter::middleware::api_key::ApiKeyState;
use product_catalog_server::adapter::repository::{
    ColourSqliteRepository, ProductSqliteRepository, ProductTypeSqliteRepository,
};
use product_catalog_server::domain::repository::{
    ColourRepository, ProductRepository, ProductTypeRepository,
};
use product_catalog_server::infrastructure::config::Config;
use product_catalog_server::infrastructure::{database, telemetry};
use product_catalog_server::usecase;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config.yaml".to_string());
    let cfg = Config::load(&config_path)?;

    // Telemetry
    telemetry::init_telemetry(&cfg.observability)?;

    info!(
        app_name = %cfg.app.name,
        version = %cfg.app.version,
        environment = %cfg.app.environment,
        "starting product catalog server"
    );

    expose_error_details(!cfg.app.is_production());

    // Database
    let pool = database::connect(&cfg.database).await?;
    if cfg.database.run_migrations {
        database::run_migrations(&pool).await?;
        info!("database migrations applied");
    }
    let pool = Arc::new(pool);

    let colour_repo: Arc<dyn ColourRepository> =
        Arc::new(ColourSqliteRepository::new(pool.clone()));
    let product_type_repo: Arc<dyn ProductTypeRepository> =
        Arc::new(ProductTypeSqliteRepository::new(pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(ProductSqliteRepository::new(pool.clone()));

    let state = AppState {
        create_colour_uc: Arc::new(usecase::CreateColourUseCase::new(colour_repo.clone())),
        list_colours_uc: Arc::new(usecase::ListColoursUseCase::new(colour_repo.clone())),
        create_product_type_uc: Arc::new(usecase::CreateProductTypeUseCase::new(
            product_type_repo.clone(),
        )),
        list_product_types_uc: Arc::new(usecase::ListProductTypesUseCase::new(
            product_type_repo.clone(),
        )),
        create_product_uc: Arc::new(usecase::CreateProductUseCase::new(
            product_repo.clone(),
            colour_repo,
            product_type_repo,
        )),
        list_products_uc: Arc::new(usecase::ListProductsUseCase::new(product_repo.clone())),
        get_product_uc: Arc::new(usecase::GetProductUseCase::new(product_repo)),
        db_pool: pool.clone(),
    };

    if cfg.auth.api_key.is_none() {
        tracing::warn!("no api key configured, guarded routes will answer 500");
    }
    let app = handler::router(state, ApiKeyState::new(cfg.auth.api_key));

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!("REST server starting on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("product catalog server exited");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = signal::ctrl_c() => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
