use async_trait::async_trait;

use crate::domain::entity::{NewProductType, ProductType};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductTypeRepository: Send + Sync {
    /// Stores the product type and returns its generated id.
    async fn create(&self, product_type: &NewProductType) -> anyhow::Result<i64>;
    async fn find_all(&self) -> anyhow::Result<Vec<ProductType>>;
}
