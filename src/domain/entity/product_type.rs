use super::audit::AuditFields;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
    pub audit: AuditFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProductType {
    pub name: String,
    pub audit: AuditFields,
}

impl NewProductType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            audit: AuditFields::created_now(),
        }
    }
}
