use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entity::{NewProduct, DEFAULT_CREATOR};
use crate::domain::repository::{ColourRepository, ProductRepository, ProductTypeRepository};

#[derive(Debug, thiserror::Error)]
pub enum CreateProductError {
    /// A business rule rejected the request; the message names the offending values.
    #[error("{0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub struct CreateProductInput {
    pub name: String,
    pub product_type_id: i64,
    pub colour_ids: Vec<i64>,
    pub created_by: Option<String>,
}

/// CreateProductUseCase checks that every referenced colour and the product
/// type exist before anything is written.
///
/// The checks and the insert are not atomic. A colour or product type removed
/// between the two still trips the store's foreign keys, which reaches the
/// caller as `Internal` carrying the store error.
pub struct CreateProductUseCase {
    product_repo: Arc<dyn ProductRepository>,
    colour_repo: Arc<dyn ColourRepository>,
    product_type_repo: Arc<dyn ProductTypeRepository>,
}

impl CreateProductUseCase {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        colour_repo: Arc<dyn ColourRepository>,
        product_type_repo: Arc<dyn ProductTypeRepository>,
    ) -> Self {
        Self {
            product_repo,
            colour_repo,
            product_type_repo,
        }
    }

    pub async fn execute(&self, input: CreateProductInput) -> Result<i64, CreateProductError> {
        if input.colour_ids.is_empty() {
            return Err(CreateProductError::BadRequest(
                "At least one colour must be selected.".to_string(),
            ));
        }

        if input.colour_ids.iter().any(|id| *id <= 0) {
            return Err(CreateProductError::BadRequest(
                "Invalid colour ID. Colour IDs must be positive numbers.".to_string(),
            ));
        }

        let colour_ids = distinct(&input.colour_ids);

        let existing_colours: HashSet<i64> = self
            .colour_repo
            .find_all()
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        let missing: Vec<String> = colour_ids
            .iter()
            .filter(|id| !existing_colours.contains(id))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(CreateProductError::BadRequest(format!(
                "The following colour IDs do not exist: {}. \
                 Please create these colours first or use existing colour IDs.",
                missing.join(", ")
            )));
        }

        let type_exists = self
            .product_type_repo
            .find_all()
            .await?
            .iter()
            .any(|t| t.id == input.product_type_id);
        if !type_exists {
            return Err(CreateProductError::BadRequest(format!(
                "Product type with ID '{}' does not exist. \
                 Please create the product type first or use an existing product type ID.",
                input.product_type_id
            )));
        }

        let creator = input
            .created_by
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CREATOR.to_string());
        let product = NewProduct::new(input.name, input.product_type_id, creator);

        let id = self
            .product_repo
            .create_with_colours(&product, &colour_ids)
            .await?;

        tracing::info!(
            product_id = id,
            product_type_id = product.product_type_id,
            colour_count = colour_ids.len(),
            "product created"
        );
        Ok(id)
    }
}

/// Request order is kept; repeats after the first occurrence are dropped.
fn distinct(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
