use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rol::Table)
                    .if_not_exists()
                    .col(pk_auto(Rol::Id))
                    .col(string(Rol::Nombre))
                    .col(text(Rol::Descripcion))
                    .col(string_null(Rol::CreatedBy))
                    .col(string_null(Rol::ModifiedBy))
                    .col(timestamp_with_time_zone_null(Rol::DateCreated))
                    .col(timestamp_with_time_zone_null(Rol::DateModified))
                    .to_owned(),
            )
            .await?;

        // Seed the base roles referenced by usuario registrations
        let seed = Query::insert()
            .into_table(Rol::Table)
            .columns([Rol::Nombre, Rol::Descripcion, Rol::CreatedBy])
            .values_panic(["CLIENTE".into(), "Rol para clientes".into(), "system".into()])
            .values_panic([
                "ADMIN".into(),
                "Rol para administradores".into(),
                "system".into(),
            ])
            .to_owned();
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rol::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Rol {
    Table,
    Id,
    Nombre,
    Descripcion,
    CreatedBy,
    ModifiedBy,
    DateCreated,
    DateModified,
}
