//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Organization;
use crate::output::formatters::{NOT_AVAILABLE, format_date, format_flag};

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "SLUG")]
    pub slug: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "CREATED")]
    pub created: String,

    #[tabled(rename = "EARLY ADOPTER")]
    pub early_adopter: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            slug: org.slug.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            name: org.name.clone(),
            id: org.id.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            created: format_date(org.date_created),
            early_adopter: format_flag(org.is_early_adopter),
        }
    }
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self::from(&org)
    }
}
