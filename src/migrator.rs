use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_parts_table::Migration),
            Box::new(m20240601_000002_create_suppliers_table::Migration),
            Box::new(m20240601_000003_create_supplier_parts_table::Migration),
            Box::new(m20240601_000004_create_supplier_price_breaks_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240601_000001_create_parts_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_parts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Identity-only stand-in; the inventory module owns the full table
            manager
                .create_table(
                    Table::create()
                        .table(Parts::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Parts::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Parts::Name).string_len(100).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Parts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Parts {
        Table,
        Id,
        Name,
    }
}

mod m20240601_000002_create_suppliers_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000002_create_suppliers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Suppliers::Name).string_len(100).not_null())
                        .col(
                            ColumnDef::new(Suppliers::Url)
                                .string_len(200)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Suppliers::Address)
                                .string_len(200)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Suppliers::Phone)
                                .string_len(50)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Suppliers::Email)
                                .string_len(254)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Suppliers::Contact)
                                .string_len(100)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Suppliers::Notes)
                                .text()
                                .not_null()
                                .default(""),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_suppliers_name")
                        .table(Suppliers::Table)
                        .col(Suppliers::Name)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Suppliers {
        Table,
        Id,
        Name,
        Url,
        Address,
        Phone,
        Email,
        Contact,
        Notes,
    }
}

mod m20240601_000003_create_supplier_parts_table {

    use super::m20240601_000001_create_parts_table::Parts;
    use super::m20240601_000002_create_suppliers_table::Suppliers;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000003_create_supplier_parts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierParts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierParts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SupplierParts::SupplierId).uuid().not_null())
                        .col(ColumnDef::new(SupplierParts::PartId).uuid().not_null())
                        .col(ColumnDef::new(SupplierParts::Mpn).string_len(100).not_null())
                        .col(
                            ColumnDef::new(SupplierParts::Url)
                                .string_len(200)
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(SupplierParts::Description)
                                .string_len(250)
                                .not_null()
                                .default(""),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplier_parts_supplier_id")
                                .from(SupplierParts::Table, SupplierParts::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplier_parts_part_id")
                                .from(SupplierParts::Table, SupplierParts::PartId)
                                .to(Parts::Table, Parts::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // (supplier_id, mpn) is deliberately not unique
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_parts_supplier_mpn")
                        .table(SupplierParts::Table)
                        .col(SupplierParts::SupplierId)
                        .col(SupplierParts::Mpn)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_parts_part_id")
                        .table(SupplierParts::Table)
                        .col(SupplierParts::PartId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierParts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SupplierParts {
        Table,
        Id,
        SupplierId,
        PartId,
        Mpn,
        Url,
        Description,
    }
}

mod m20240601_000004_create_supplier_price_breaks_table {

    use super::m20240601_000003_create_supplier_parts_table::SupplierParts;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000004_create_supplier_price_breaks_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierPriceBreaks::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierPriceBreaks::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierPriceBreaks::SupplierPartId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierPriceBreaks::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierPriceBreaks::Cost)
                                .decimal_len(10, 3)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierPriceBreaks::Currency)
                                .string_len(10)
                                .not_null()
                                .default(""),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supplier_price_breaks_supplier_part_id")
                                .from(
                                    SupplierPriceBreaks::Table,
                                    SupplierPriceBreaks::SupplierPartId,
                                )
                                .to(SupplierParts::Table, SupplierParts::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // (supplier_part_id, quantity) is deliberately not unique
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supplier_price_breaks_part_quantity")
                        .table(SupplierPriceBreaks::Table)
                        .col(SupplierPriceBreaks::SupplierPartId)
                        .col(SupplierPriceBreaks::Quantity)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierPriceBreaks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SupplierPriceBreaks {
        Table,
        Id,
        SupplierPartId,
        Quantity,
        Cost,
        Currency,
    }
}
