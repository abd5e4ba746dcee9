use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 banners 表（由外部系统维护，这里只建表结构）
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Banner::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Banner::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // 创建 click_stats 表：每个 (banner_id, 分钟) 一行
        // 复合主键同时作为 upsert 的冲突键
        manager
            .create_table(
                Table::create()
                    .table(ClickStat::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ClickStat::BannerId).big_integer().not_null())
                    .col(ColumnDef::new(ClickStat::Timestamp).timestamp().not_null())
                    .col(
                        ColumnDef::new(ClickStat::Count)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_click_stats")
                            .col(ClickStat::BannerId)
                            .col(ClickStat::Timestamp),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_click_stats_banner")
                            .from(ClickStat::Table, ClickStat::BannerId)
                            .to(Banner::Table, Banner::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClickStat::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Banner {
    #[sea_orm(iden = "banners")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ClickStat {
    #[sea_orm(iden = "click_stats")]
    Table,
    BannerId,
    Timestamp,
    Count,
}
