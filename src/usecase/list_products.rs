use std::sync::Arc;

use crate::domain::entity::ProductSummary;
use crate::domain::repository::ProductRepository;

#[derive(Debug, thiserror::Error)]
pub enum ListProductsError {
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// ListProductsUseCase returns every product as an id/name pair.
pub struct ListProductsUseCase {
    product_repo: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self) -> Result<Vec<ProductSummary>, ListProductsError> {
        let products = self.product_repo.find_all().await?;
        Ok(products.into_iter().map(ProductSummary::from).collect())
    }
}
