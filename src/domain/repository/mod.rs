pub mod colour_repository;
pub mod product_repository;
pub mod product_type_repository;

pub use colour_repository::ColourRepository;
pub use product_repository::ProductRepository;
pub use product_type_repository::ProductTypeRepository;
