use std::sync::Arc;

use crate::domain::entity::NewColour;
use crate::domain::repository::ColourRepository;

#[derive(Debug, thiserror::Error)]
pub enum CreateColourError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub struct CreateColourInput {
    pub name: String,
}

pub struct CreateColourUseCase {
    colour_repo: Arc<dyn ColourRepository>,
}

impl CreateColourUseCase {
    pub fn new(colour_repo: Arc<dyn ColourRepository>) -> Self {
        Self { colour_repo }
    }

    pub async fn execute(&self, input: CreateColourInput) -> Result<i64, CreateColourError> {
        if input.name.trim().is_empty() {
            return Err(CreateColourError::InvalidArgument(
                "Colour name is required.".to_string(),
            ));
        }

        let colour = NewColour::new(input.name);
        let id = self.colour_repo.create(&colour).await?;

        tracing::info!(colour_id = id, name = %colour.name, "colour created");
        Ok(id)
    }
}
