use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entity::{AuditFields, Colour, ProductDetail, ProductSummary, ProductType};

/// Body of every 201 response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
    pub location: String,
}

/// Uniform error envelope. Optional members are left out rather than sent as null.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColourResponse {
    pub id: i64,
    pub name: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_date: String,
    pub updated_date: Option<String>,
    pub deleted_date: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeResponse {
    pub id: i64,
    pub name: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_date: String,
    pub updated_date: Option<String>,
    pub deleted_date: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProductSummaryResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub id: i64,
    pub name: String,
    pub product_type: Option<String>,
    pub colours: Vec<String>,
}

struct AuditColumns {
    created_by: Option<String>,
    updated_by: Option<String>,
    created_date: String,
    updated_date: Option<String>,
    deleted_date: Option<String>,
}

impl From<AuditFields> for AuditColumns {
    fn from(a: AuditFields) -> Self {
        Self {
            created_by: a.created_by,
            updated_by: a.updated_by,
            created_date: a.created_date.to_rfc3339(),
            updated_date: a.updated_date.map(|d| d.to_rfc3339()),
            deleted_date: a.deleted_date.map(|d| d.to_rfc3339()),
        }
    }
}

impl From<Colour> for ColourResponse {
    fn from(c: Colour) -> Self {
        let audit = AuditColumns::from(c.audit);
        Self {
            id: c.id,
            name: c.name,
            created_by: audit.created_by,
            updated_by: audit.updated_by,
            created_date: audit.created_date,
            updated_date: audit.updated_date,
            deleted_date: audit.deleted_date,
        }
    }
}

impl From<ProductType> for ProductTypeResponse {
    fn from(t: ProductType) -> Self {
        let audit = AuditColumns::from(t.audit);
        Self {
            id: t.id,
            name: t.name,
            created_by: audit.created_by,
            updated_by: audit.updated_by,
            created_date: audit.created_date,
            updated_date: audit.updated_date,
            deleted_date: audit.deleted_date,
        }
    }
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(p: ProductSummary) -> Self {
        Self {
            id: p.id,
            name: p.name,
        }
    }
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(p: ProductDetail) -> Self {
        Self {
            id: p.id,
            name: p.name,
            product_type: p.product_type,
            colours: p.colours,
        }
    }
}
