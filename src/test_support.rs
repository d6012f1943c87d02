//! Helpers for tests: a migrated in-memory SQLite pool and an `AppState`
//! wired to it.

use std::str::FromStr;
use std::sync::Arc;

use secrecy::SecretString;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::adapter::handler::{router, AppState};
use crate::adapter::middleware::api_key::ApiKeyState;
use crate::adapter::repository::{
    ColourSqliteRepository, ProductSqliteRepository, ProductTypeSqliteRepository,
};
use crate::domain::repository::{ColourRepository, ProductRepository, ProductTypeRepository};
use crate::usecase::{
    CreateColourUseCase, CreateProductTypeUseCase, CreateProductUseCase, GetProductUseCase,
    ListColoursUseCase, ListProductTypesUseCase, ListProductsUseCase,
};

pub const TEST_API_KEY: &str = "test-api-key";

/// A private in-memory database. One connection that never expires, so the
/// data lives as long as the pool.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("open in-memory sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrate in-memory sqlite");
    pool
}

pub fn make_app_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);
    let colour_repo: Arc<dyn ColourRepository> =
        Arc::new(ColourSqliteRepository::new(pool.clone()));
    let product_type_repo: Arc<dyn ProductTypeRepository> =
        Arc::new(ProductTypeSqliteRepository::new(pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(ProductSqliteRepository::new(pool.clone()));

    AppState {
        create_colour_uc: Arc::new(CreateColourUseCase::new(colour_repo.clone())),
        list_colours_uc: Arc::new(ListColoursUseCase::new(colour_repo.clone())),
        create_product_type_uc: Arc::new(CreateProductTypeUseCase::new(
            product_type_repo.clone(),
        )),
        list_product_types_uc: Arc::new(ListProductTypesUseCase::new(product_type_repo.clone())),
        create_product_uc: Arc::new(CreateProductUseCase::new(
            product_repo.clone(),
            colour_repo,
            product_type_repo,
        )),
        list_products_uc: Arc::new(ListProductsUseCase::new(product_repo.clone())),
        get_product_uc: Arc::new(GetProductUseCase::new(product_repo)),
        db_pool: pool,
    }
}

/// Full router over a fresh store. `api_key` is the configured secret.
pub async fn make_test_app(api_key: Option<&str>) -> (axum::Router, SqlitePool) {
    let pool = memory_pool().await;
    let state = make_app_state(pool.clone());
    let api_key_state = ApiKeyState::new(api_key.map(|k| SecretString::new(k.to_string())));
    (router(state, api_key_state), pool)
}
