pub mod colour_sqlite;
pub mod product_sqlite;
pub mod product_type_sqlite;
pub mod store_error;

pub use colour_sqlite::ColourSqliteRepository;
pub use product_sqlite::ProductSqliteRepository;
pub use product_type_sqlite::ProductTypeSqliteRepository;
pub use store_error::{classify, StoreFailure};
