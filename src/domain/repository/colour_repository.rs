use async_trait::async_trait;

use crate::domain::entity::{Colour, NewColour};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ColourRepository: Send + Sync {
    /// Stores the colour and returns its generated id.
    async fn create(&self, colour: &NewColour) -> anyhow::Result<i64>;
    async fn find_all(&self) -> anyhow::Result<Vec<Colour>>;
}
