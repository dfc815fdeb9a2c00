use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::draft::BriefingDraft;

/// SeaORM entity for the `briefings` table.
///
/// Rows are written once by the wizard submit and only ever deleted afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "briefings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeUtc,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub project_name: String,
    pub project_type: ProjectType,
    #[sea_orm(column_type = "Text")]
    pub project_description: String,
    pub has_domain: bool,
    pub domain_name: Option<String>,
    pub products: Option<Vec<String>>,
    pub has_logo: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub logo_url: Option<String>,
    pub brand_colors: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub visual_references: Option<String>,
    pub design_style: Option<String>,
    pub pages_needed: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub other_pages: Option<String>,
    pub functionalities: Option<Vec<String>>,
    pub custom_functionalities: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub other_functionalities: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub integrations: Option<String>,
    pub launch_deadline: Option<Date>,
    pub budget: Option<Budget>,
    pub has_content: Option<ContentStatus>,
    pub needs_maintenance: Option<Maintenance>,
    pub who_manages: Option<SiteManager>,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_info: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ProjectType {
    #[sea_orm(string_value = "institucional")]
    #[serde(rename = "institucional")]
    Institucional,
    #[sea_orm(string_value = "ecommerce")]
    #[serde(rename = "ecommerce")]
    Ecommerce,
    #[sea_orm(string_value = "landing")]
    #[serde(rename = "landing")]
    Landing,
    #[sea_orm(string_value = "blog")]
    #[serde(rename = "blog")]
    Blog,
    #[sea_orm(string_value = "portfolio")]
    #[serde(rename = "portfolio")]
    Portfolio,
    #[sea_orm(string_value = "outro")]
    #[serde(rename = "outro")]
    Outro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Budget {
    #[sea_orm(string_value = "ate-5k")]
    #[serde(rename = "ate-5k")]
    UpTo5k,
    #[sea_orm(string_value = "5k-15k")]
    #[serde(rename = "5k-15k")]
    From5kTo15k,
    #[sea_orm(string_value = "15k-30k")]
    #[serde(rename = "15k-30k")]
    From15kTo30k,
    #[sea_orm(string_value = "acima-30k")]
    #[serde(rename = "acima-30k")]
    Above30k,
    #[sea_orm(string_value = "nao-definido")]
    #[serde(rename = "nao-definido")]
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ContentStatus {
    #[sea_orm(string_value = "completo")]
    #[serde(rename = "completo")]
    Complete,
    #[sea_orm(string_value = "parcial")]
    #[serde(rename = "parcial")]
    Partial,
    #[sea_orm(string_value = "nenhum")]
    #[serde(rename = "nenhum")]
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Maintenance {
    #[sea_orm(string_value = "sim-mensal")]
    #[serde(rename = "sim-mensal")]
    Monthly,
    #[sea_orm(string_value = "sim-eventual")]
    #[serde(rename = "sim-eventual")]
    OnDemand,
    #[sea_orm(string_value = "nao")]
    #[serde(rename = "nao")]
    No,
    #[sea_orm(string_value = "nao-sei")]
    #[serde(rename = "nao-sei")]
    Unsure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum SiteManager {
    #[sea_orm(string_value = "eu-mesmo")]
    #[serde(rename = "eu-mesmo")]
    Myself,
    #[sea_orm(string_value = "equipe-interna")]
    #[serde(rename = "equipe-interna")]
    InternalTeam,
    #[sea_orm(string_value = "terceirizado")]
    #[serde(rename = "terceirizado")]
    Outsourced,
    #[sea_orm(string_value = "nao-sei-ainda")]
    #[serde(rename = "nao-sei-ainda")]
    Undecided,
}

// ── DTOs ──

/// Column values for a new row. `None` means "leave the column unset" so the
/// database applies its default or rejects a missing required column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBriefing {
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub project_name: Option<String>,
    pub project_type: Option<ProjectType>,
    pub project_description: Option<String>,
    pub has_domain: Option<bool>,
    pub domain_name: Option<String>,
    pub products: Option<Vec<String>>,
    pub has_logo: Option<bool>,
    pub logo_url: Option<String>,
    pub brand_colors: Option<Vec<String>>,
    pub visual_references: Option<String>,
    pub design_style: Option<String>,
    pub pages_needed: Option<Vec<String>>,
    pub other_pages: Option<String>,
    pub functionalities: Option<Vec<String>>,
    pub custom_functionalities: Option<Vec<String>>,
    pub other_functionalities: Option<String>,
    pub integrations: Option<String>,
    pub launch_deadline: Option<Date>,
    pub budget: Option<Budget>,
    pub has_content: Option<ContentStatus>,
    pub needs_maintenance: Option<Maintenance>,
    pub who_manages: Option<SiteManager>,
    pub additional_info: Option<String>,
}

impl NewBriefing {
    /// Build the row from the wizard's answers. `logo_url` replaces whatever
    /// URL the draft carried.
    pub fn from_draft(draft: BriefingDraft, logo_url: Option<String>) -> Self {
        Self {
            contact_name: draft.contact_name,
            contact_phone: draft.contact_phone,
            contact_email: draft.contact_email,
            project_name: draft.project_name,
            project_type: draft.project_type,
            project_description: draft.project_description,
            has_domain: draft.has_domain,
            domain_name: draft.domain_name,
            products: draft.products,
            has_logo: draft.has_logo,
            logo_url,
            brand_colors: draft.brand_colors,
            visual_references: draft.visual_references,
            design_style: draft.design_style,
            pages_needed: draft.pages_needed,
            other_pages: draft.other_pages,
            functionalities: draft.functionalities,
            custom_functionalities: draft.custom_functionalities,
            other_functionalities: draft.other_functionalities,
            integrations: draft.integrations,
            launch_deadline: draft.launch_deadline,
            budget: draft.budget,
            has_content: draft.has_content,
            needs_maintenance: draft.needs_maintenance,
            who_manages: draft.who_manages,
            additional_info: draft.additional_info,
        }
    }
}

/// Body returned by the delete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
