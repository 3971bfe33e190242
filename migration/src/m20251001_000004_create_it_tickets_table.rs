use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // it_ticketsテーブル作成
        manager
            .create_table(
                Table::create()
                    .table(ItTickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItTickets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ItTickets::Title).text().not_null())
                    .col(ColumnDef::new(ItTickets::Description).text().null())
                    .col(ColumnDef::new(ItTickets::Status).string_len(20).not_null())
                    .col(ColumnDef::new(ItTickets::AssignedTo).text().not_null())
                    .col(
                        ColumnDef::new(ItTickets::CurrentStage)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItTickets::Priority)
                            .string_len(20)
                            .not_null()
                            .default("Medium"),
                    )
                    .col(ColumnDef::new(ItTickets::Category).string_len(30).null())
                    .col(
                        ColumnDef::new(ItTickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItTickets::ResolvedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ItTickets::TimeInStageHours).double().null())
                    // 現在のステージに入った時刻（滞在時間の算出に使用）
                    .col(
                        ColumnDef::new(ItTickets::StageEnteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_it_tickets_created_at")
                    .table(ItTickets::Table)
                    .col(ItTickets::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_it_tickets_status")
                    .table(ItTickets::Table)
                    .col(ItTickets::Status)
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
                    .name("idx_it_tickets_status")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_it_tickets_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItTickets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ItTickets {
    Table,
    Id,
    Title,
    Description,
    Status,
    AssignedTo,
    CurrentStage,
    Priority,
    Category,
    CreatedAt,
    ResolvedAt,
    TimeInStageHours,
    StageEnteredAt,
}
