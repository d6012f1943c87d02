use std::sync::Arc;

use crate::domain::entity::ProductDetail;
use crate::domain::repository::ProductRepository;

#[derive(Debug, thiserror::Error)]
pub enum GetProductError {
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// GetProductUseCase resolves one product with its type and colour names.
/// Absence is `Ok(None)`; the caller decides how to report it.
pub struct GetProductUseCase {
    product_repo: Arc<dyn ProductRepository>,
}

impl GetProductUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, id: i64) -> Result<Option<ProductDetail>, GetProductError> {
        Ok(self.product_repo.find_detail_by_id(id).await?)
    }
}
