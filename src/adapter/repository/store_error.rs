//! Classification of store failures that reach the boundary wrapped in
//! `anyhow::Error`.

use sqlx::error::ErrorKind;

/// SQLITE_CONSTRAINT primary result code.
const SQLITE_CONSTRAINT: i32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFailure {
    ForeignKey,
    Unique,
    NotNull,
    /// A constraint violation of any other kind.
    Constraint,
    /// A store error that is not a constraint violation.
    Database,
    /// Not a store error at all.
    Unexpected,
}

impl StoreFailure {
    pub fn is_constraint(self) -> bool {
        matches!(
            self,
            Self::ForeignKey | Self::Unique | Self::NotNull | Self::Constraint
        )
    }
}

/// Finds the `sqlx::Error` in the chain, if any, and sorts it. The driver's
/// error kind is consulted first, then the SQLite message text, then the
/// primary result code.
pub fn classify(err: &anyhow::Error) -> StoreFailure {
    let Some(sqlx_err) = err.chain().find_map(|e| e.downcast_ref::<sqlx::Error>()) else {
        return StoreFailure::Unexpected;
    };
    let sqlx::Error::Database(db_err) = sqlx_err else {
        return StoreFailure::Database;
    };

    match db_err.kind() {
        ErrorKind::ForeignKeyViolation => return StoreFailure::ForeignKey,
        ErrorKind::UniqueViolation => return StoreFailure::Unique,
        ErrorKind::NotNullViolation => return StoreFailure::NotNull,
        ErrorKind::CheckViolation => return StoreFailure::Constraint,
        _ => {}
    }

    let message = db_err.message();
    if message.contains("FOREIGN KEY constraint failed") {
        return StoreFailure::ForeignKey;
    }
    if message.contains("UNIQUE constraint failed") {
        return StoreFailure::Unique;
    }
    if message.contains("NOT NULL constraint failed") {
        return StoreFailure::NotNull;
    }

    let primary_code = db_err
        .code()
        .and_then(|code| code.parse::<i32>().ok())
        .map(|code| code & 0xff);
    if primary_code == Some(SQLITE_CONSTRAINT) {
        StoreFailure::Constraint
    } else {
        StoreFailure::Database
    }
}
