use super::audit::AuditFields;

#[derive(Debug, Clone, PartialEq)]
pub struct Colour {
    pub id: i64,
    pub name: String,
    pub audit: AuditFields,
}

/// NewColour is a colour that has not been stored yet; the id comes from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewColour {
    pub name: String,
    pub audit: AuditFields,
}

impl NewColour {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            audit: AuditFields::created_now(),
        }
    }
}
