use super::audit::AuditFields;

/// Product as stored, without its type or colours resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub product_type_id: i64,
    pub audit: AuditFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub product_type_id: i64,
    pub audit: AuditFields,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, product_type_id: i64, creator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            product_type_id,
            audit: AuditFields::created_by(creator),
        }
    }
}

/// ProductSummary is the shallow list projection of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
}

impl From<Product> for ProductSummary {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

/// ProductDetail is a product with its type name and colour names resolved
/// through explicit joins. It holds names only, never references back into
/// other entities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub product_type: Option<String>,
    pub colours: Vec<String>,
}
