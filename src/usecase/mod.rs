pub mod create_colour;
pub mod create_product;
pub mod create_product_type;
pub mod get_product;
pub mod list_colours;
pub mod list_product_types;
pub mod list_products;

pub use create_colour::{CreateColourError, CreateColourInput, CreateColourUseCase};
pub use create_product::{CreateProductError, CreateProductInput, CreateProductUseCase};
pub use create_product_type::{
    CreateProductTypeError, CreateProductTypeInput, CreateProductTypeUseCase,
};
pub use get_product::{GetProductError, GetProductUseCase};
pub use list_colours::{ListColoursError, ListColoursUseCase};
pub use list_product_types::{ListProductTypesError, ListProductTypesUseCase};
pub use list_products::{ListProductsError, ListProductsUseCase};
