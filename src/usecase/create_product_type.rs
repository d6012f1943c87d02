use std::sync::Arc;

use crate::domain::entity::NewProductType;
use crate::domain::repository::ProductTypeRepository;

#[derive(Debug, thiserror::Error)]
pub enum CreateProductTypeError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub struct CreateProductTypeInput {
    pub name: String,
}

pub struct CreateProductTypeUseCase {
    product_type_repo: Arc<dyn ProductTypeRepository>,
}

impl CreateProductTypeUseCase {
    pub fn new(product_type_repo: Arc<dyn ProductTypeRepository>) -> Self {
        Self { product_type_repo }
    }

    pub async fn execute(
        &self,
        input: CreateProductTypeInput,
    ) -> Result<i64, CreateProductTypeError> {
        if input.name.trim().is_empty() {
            return Err(CreateProductTypeError::InvalidArgument(
                "Product type name is required.".to_string(),
            ));
        }

        let product_type = NewProductType::new(input.name);
        let id = self.product_type_repo.create(&product_type).await?;

        tracing::info!(product_type_id = id, name = %product_type.name, "product type created");
        Ok(id)
    }
}
