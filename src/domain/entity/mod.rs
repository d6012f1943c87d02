pub mod audit;
pub mod colour;
pub mod product;
pub mod product_type;

pub use audit::{AuditFields, DEFAULT_CREATOR};
pub use colour::{Colour, NewColour};
pub use product::{NewProduct, Product, ProductDetail, ProductSummary};
pub use product_type::{NewProductType, ProductType};
