use sea_orm::*;
use uuid::Uuid;

use crate::models::briefings::{self, NewBriefing};

/// Required columns are left unset when absent so Postgres rejects the row;
/// nullable ones fall back to their default.
fn required<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    value.map_or(NotSet, Set)
}

fn nullable<V>(value: Option<V>) -> ActiveValue<Option<V>>
where
    Option<V>: Into<Value>,
{
    value.map_or(NotSet, |v| Set(Some(v)))
}

/// Column values for a new row. `id` and `created_at` come from the column
/// defaults.
pub fn new_briefing_model(input: NewBriefing) -> briefings::ActiveModel {
    briefings::ActiveModel {
        id: NotSet,
        created_at: NotSet,
        contact_name: nullable(input.contact_name),
        contact_phone: nullable(input.contact_phone),
        contact_email: nullable(input.contact_email),
        project_name: required(input.project_name),
        project_type: required(input.project_type),
        project_description: required(input.project_description),
        has_domain: required(input.has_domain),
        domain_name: nullable(input.domain_name),
        products: nullable(input.products),
        has_logo: required(input.has_logo),
        logo_url: nullable(input.logo_url),
        brand_colors: nullable(input.brand_colors),
        visual_references: nullable(input.visual_references),
        design_style: nullable(input.design_style),
        pages_needed: nullable(input.pages_needed),
        other_pages: nullable(input.other_pages),
        functionalities: nullable(input.functionalities),
        custom_functionalities: nullable(input.custom_functionalities),
        other_functionalities: nullable(input.other_functionalities),
        integrations: nullable(input.integrations),
        launch_deadline: nullable(input.launch_deadline),
        budget: nullable(input.budget),
        has_content: nullable(input.has_content),
        needs_maintenance: nullable(input.needs_maintenance),
        who_manages: nullable(input.who_manages),
        additional_info: nullable(input.additional_info),
    }
}

/// Insert a submitted briefing and return the stored row.
pub async fn insert_briefing(
    db: &DatabaseConnection,
    input: NewBriefing,
) -> Result<briefings::Model, DbErr> {
    new_briefing_model(input).insert(db).await
}

/// Fetch every briefing, newest first.
pub async fn get_all_briefings(db: &DatabaseConnection) -> Result<Vec<briefings::Model>, DbErr> {
    briefings::Entity::find()
        .order_by_desc(briefings::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch a single briefing by ID.
pub async fn get_briefing_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<briefings::Model>, DbErr> {
    briefings::Entity::find_by_id(id).one(db).await
}

/// Fetch only the logo URL of a briefing. `None` when the row is missing or
/// has no logo.
pub async fn get_logo_url(db: &DatabaseConnection, id: Uuid) -> Result<Option<String>, DbErr> {
    let logo_url: Option<Option<String>> = briefings::Entity::find_by_id(id)
        .select_only()
        .column(briefings::Column::LogoUrl)
        .into_tuple()
        .one(db)
        .await?;

    Ok(logo_url.flatten())
}

/// Delete a briefing by ID.
pub async fn delete_briefing(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    briefings::Entity::delete_by_id(id).exec(db).await
}
