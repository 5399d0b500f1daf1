use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CATEGORIES: [Category; 9] = [
    Category::Automotive,
    Category::Books,
    Category::Clothing,
    Category::Electronics,
    Category::Food,
    Category::Health,
    Category::Home,
    Category::Sport,
    Category::Toys,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Category::Enum)
                    .values(CATEGORIES)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::Description).text().not_null())
                    .col(
                        ColumnDef::new(Products::Category)
                            .enumeration(Category::Enum, CATEGORIES)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Products::Quantity).big_integer().not_null())
                    // Unconstrained NUMERIC; the scale is fixed to 2 on write
                    .col(ColumnDef::new(Products::Price).decimal().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_name_unique")
                    .table(Products::Table)
                    .col(Products::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::Category)
                    .to_owned(),
            )
            .await?;

        // Case-insensitive lookups filter on LOWER(name)
        manager
            .get_connection()
            .execute_unprepared("CREATE INDEX idx_products_name_lower ON products (LOWER(name))")
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Category::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Category,
    Quantity,
    Price,
}

#[derive(DeriveIden, Clone, Copy)]
enum Category {
    #[sea_orm(iden = "category_type")]
    Enum,
    #[sea_orm(iden = "AUTOMOTIVE")]
    Automotive,
    #[sea_orm(iden = "BOOKS")]
    Books,
    #[sea_orm(iden = "CLOTHING")]
    Clothing,
    #[sea_orm(iden = "ELECTRONICS")]
    Electronics,
    #[sea_orm(iden = "FOOD")]
    Food,
    #[sea_orm(iden = "HEALTH")]
    Health,
    #[sea_orm(iden = "HOME")]
    Home,
    #[sea_orm(iden = "SPORT")]
    Sport,
    #[sea_orm(iden = "TOYS")]
    Toys,
}
