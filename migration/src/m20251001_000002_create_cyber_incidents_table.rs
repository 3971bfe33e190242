use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // cyber_incidentsテーブル作成
        manager
            .create_table(
                Table::create()
                    .table(CyberIncidents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CyberIncidents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CyberIncidents::Title).text().not_null())
                    .col(ColumnDef::new(CyberIncidents::Description).text().null())
                    .col(
                        ColumnDef::new(CyberIncidents::ThreatType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CyberIncidents::Severity)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CyberIncidents::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CyberIncidents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CyberIncidents::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CyberIncidents::ResolutionTimeHours)
                            .double()
                            .null(),
                    )
                    .col(ColumnDef::new(CyberIncidents::AssignedTo).text().null())
                    .to_owned(),
            )
            .await?;

        // 一覧は作成日時の降順で取得する
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cyber_incidents_created_at")
                    .table(CyberIncidents::Table)
                    .col(CyberIncidents::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cyber_incidents_status")
                    .table(CyberIncidents::Table)
                    .col(CyberIncidents::Status)
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
                    .name("idx_cyber_incidents_status")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_cyber_incidents_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CyberIncidents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CyberIncidents {
    Table,
    Id,
    Title,
    Description,
    ThreatType,
    Severity,
    Status,
    CreatedAt,
    ResolvedAt,
    ResolutionTimeHours,
    AssignedTo,
}
