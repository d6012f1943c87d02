use async_trait::async_trait;

use crate::domain::entity::{NewProduct, Product, ProductDetail};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores the product, then one junction row per colour id, and returns
    /// the product id. The junction rows need the generated product id, so
    /// the product row is always written first.
    async fn create_with_colours(
        &self,
        product: &NewProduct,
        colour_ids: &[i64],
    ) -> anyhow::Result<i64>;

    /// Products only; type and colours are not resolved.
    async fn find_all(&self) -> anyhow::Result<Vec<Product>>;

    /// Product with its type name and colour names, or `None` when no row matches.
    async fn find_detail_by_id(&self, id: i64) -> anyhow::Result<Option<ProductDetail>>;
}
