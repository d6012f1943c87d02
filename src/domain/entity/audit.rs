use chrono::{DateTime, Utc};

/// Creator tag stamped on products when the request does not name one.
pub const DEFAULT_CREATOR: &str = "User";

/// AuditFields carries the bookkeeping columns shared by every catalog table.
/// They are written once at creation and never consulted afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditFields {
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    pub deleted_date: Option<DateTime<Utc>>,
}

impl AuditFields {
    /// Stamp with only the creation time, as colours and product types get.
    pub fn created_now() -> Self {
        Self {
            created_by: None,
            updated_by: None,
            created_date: Utc::now(),
            updated_date: None,
            deleted_date: None,
        }
    }

    /// Stamp with creator and update columns filled in, as products get.
    pub fn created_by(creator: impl Into<String>) -> Self {
        let creator = creator.into();
        let now = Utc::now();
        Self {
            created_by: Some(creator.clone()),
            updated_by: Some(creator),
            created_date: now,
            updated_date: Some(now),
            deleted_date: None,
        }
    }
}
