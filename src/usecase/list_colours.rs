use std::sync::Arc;

use crate::domain::entity::Colour;
use crate::domain::repository::ColourRepository;

#[derive(Debug, thiserror::Error)]
pub enum ListColoursError {
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub struct ListColoursUseCase {
    colour_repo: Arc<dyn ColourRepository>,
}

impl ListColoursUseCase {
    pub fn new(colour_repo: Arc<dyn ColourRepository>) -> Self {
        Self { colour_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Colour>, ListColoursError> {
        Ok(self.colour_repo.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::AuditFields;
    use crate::domain::repository::colour_repository::MockColourRepository;

    #[tokio::test]
    async fn test_list_colours_passthrough() {
        let mut mock = MockColourRepository::new();
        mock.expect_find_all().returning(|| {
            Ok(vec![
                Colour {
                    id: 1,
                    name: "Red".to_string(),
                    audit: AuditFields::created_now(),
                },
                Colour {
                    id: 2,
                    name: "Navy Blue".to_string(),
                    audit: AuditFields::created_now(),
                },
            ])
        });

        let uc = ListColoursUseCase::new(Arc::new(mock));
        let colours = uc.execute().await.unwrap();
        assert_eq!(colours.len(), 2);
        assert_eq!(colours[1].name, "Navy Blue");
    }

    #[tokio::test]
    async fn test_list_colours_empty() {
        let mut mock = MockColourRepository::new();
        mock.expect_find_all().returning(|| Ok(vec![]));

        let uc = ListColoursUseCase::new(Arc::new(mock));
        assert!(uc.execute().await.unwrap().is_empty());
    }
}
