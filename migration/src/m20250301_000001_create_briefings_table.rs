use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `briefings` table and its columns.
#[derive(DeriveIden)]
enum Briefings {
    Table,
    Id,
    CreatedAt,
    ContactName,
    ContactPhone,
    ContactEmail,
    ProjectName,
    ProjectType,
    ProjectDescription,
    HasDomain,
    DomainName,
    Products,
    HasLogo,
    LogoUrl,
    BrandColors,
    VisualReferences,
    DesignStyle,
    PagesNeeded,
    OtherPages,
    Functionalities,
    CustomFunctionalities,
    OtherFunctionalities,
    Integrations,
    LaunchDeadline,
    Budget,
    HasContent,
    NeedsMaintenance,
    WhoManages,
    AdditionalInfo,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Briefings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Briefings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Briefings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Contact
                    .col(ColumnDef::new(Briefings::ContactName).string().null())
                    .col(ColumnDef::new(Briefings::ContactPhone).string().null())
                    .col(ColumnDef::new(Briefings::ContactEmail).string().null())
                    // Project
                    .col(ColumnDef::new(Briefings::ProjectName).string().not_null())
                    .col(ColumnDef::new(Briefings::ProjectType).string().not_null())
                    .col(ColumnDef::new(Briefings::ProjectDescription).text().not_null())
                    .col(
                        ColumnDef::new(Briefings::HasDomain)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Briefings::DomainName).string().null())
                    .col(ColumnDef::new(Briefings::Products).array(ColumnType::Text).null())
                    // Visual
                    .col(
                        ColumnDef::new(Briefings::HasLogo)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Briefings::LogoUrl).text().null())
                    .col(ColumnDef::new(Briefings::BrandColors).array(ColumnType::Text).null())
                    .col(ColumnDef::new(Briefings::VisualReferences).text().null())
                    .col(ColumnDef::new(Briefings::DesignStyle).string().null())
                    // Structure
                    .col(ColumnDef::new(Briefings::PagesNeeded).array(ColumnType::Text).null())
                    .col(ColumnDef::new(Briefings::OtherPages).text().null())
                    // Functionalities
                    .col(
                        ColumnDef::new(Briefings::Functionalities)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Briefings::CustomFunctionalities)
                            .array(ColumnType::Text)
                            .null(),
                    )
                    .col(ColumnDef::new(Briefings::OtherFunctionalities).text().null())
                    .col(ColumnDef::new(Briefings::Integrations).text().null())
                    // Logistics
                    .col(ColumnDef::new(Briefings::LaunchDeadline).date().null())
                    .col(ColumnDef::new(Briefings::Budget).string().null())
                    .col(ColumnDef::new(Briefings::HasContent).string().null())
                    .col(ColumnDef::new(Briefings::NeedsMaintenance).string().null())
                    .col(ColumnDef::new(Briefings::WhoManages).string().null())
                    .col(ColumnDef::new(Briefings::AdditionalInfo).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Briefings::Table).to_owned())
            .await
    }
}
