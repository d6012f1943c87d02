use std::sync::Arc;

use crate::domain::entity::ProductType;
use crate::domain::repository::ProductTypeRepository;

#[derive(Debug, thiserror::Error)]
pub enum ListProductTypesError {
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub struct ListProductTypesUseCase {
    product_type_repo: Arc<dyn ProductTypeRepository>,
}

impl ListProductTypesUseCase {
    pub fn new(product_type_repo: Arc<dyn ProductTypeRepository>) -> Self {
        Self { product_type_repo }
    }

    pub async fn execute(&self) -> Result<Vec<ProductType>, ListProductTypesError> {
        Ok(self.product_type_repo.find_all().await?)
    }
}
