use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(pk_auto(Usuario::Id))
                    .col(string(Usuario::Nombres))
                    .col(string(Usuario::Apellidos))
                    .col(date(Usuario::FechaNacimiento))
                    .col(
                        ColumnDef::new(Usuario::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Usuario::DocumentoIdentidad)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(string(Usuario::Telefono))
                    .col(text(Usuario::Direccion))
                    .col(double(Usuario::SalarioBase))
                    .col(integer(Usuario::IdRol))
                    .col(string_null(Usuario::CreatedBy))
                    .col(string_null(Usuario::ModifiedBy))
                    .col(timestamp_with_time_zone_null(Usuario::DateCreated))
                    .col(timestamp_with_time_zone_null(Usuario::DateModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuario_id_rol")
                            .from(Usuario::Table, Usuario::IdRol)
                            .to(Rol::Table, Rol::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup indexes for the uniqueness checks
        manager
            .create_index(
                Index::create()
                    .name("idx_usuario_email")
                    .table(Usuario::Table)
                    .col(Usuario::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_usuario_documento_identidad")
                    .table(Usuario::Table)
                    .col(Usuario::DocumentoIdentidad)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Usuario {
    Table,
    Id,
    Nombres,
    Apellidos,
    FechaNacimiento,
    Email,
    DocumentoIdentidad,
    Telefono,
    Direccion,
    SalarioBase,
    IdRol,
    CreatedBy,
    ModifiedBy,
    DateCreated,
    DateModified,
}

#[derive(DeriveIden)]
enum Rol {
    Table,
    Id,
}
