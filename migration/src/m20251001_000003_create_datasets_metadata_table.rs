use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // datasets_metadataテーブル作成（データ本体ではなくメタデータのみ）
        manager
            .create_table(
                Table::create()
                    .table(DatasetsMetadata::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DatasetsMetadata::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DatasetsMetadata::Name).text().not_null())
                    .col(
                        ColumnDef::new(DatasetsMetadata::SourceDepartment)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DatasetsMetadata::SizeMb).double().not_null())
                    .col(
                        ColumnDef::new(DatasetsMetadata::RowCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DatasetsMetadata::ColumnCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DatasetsMetadata::QualityScore).double().null())
                    .col(
                        ColumnDef::new(DatasetsMetadata::Sensitivity)
                            .string_len(20)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DatasetsMetadata::LastAccessed)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DatasetsMetadata::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_datasets_metadata_created_at")
                    .table(DatasetsMetadata::Table)
                    .col(DatasetsMetadata::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_datasets_metadata_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DatasetsMetadata::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DatasetsMetadata {
    Table,
    Id,
    Name,
    SourceDepartment,
    SizeMb,
    RowCount,
    ColumnCount,
    QualityScore,
    Sensitivity,
    LastAccessed,
    CreatedAt,
}
