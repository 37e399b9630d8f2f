//! Initial migration to create the gitmirror database schema.
//!
//! One table per synced collection plus the integration credential table.
//! Every collection carries a unique index on its external key; that index
//! is what the bulk upsert's ON CONFLICT clause targets.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        self.create_integrations(manager).await?;
        self.create_organizations(manager).await?;
        self.create_repositories(manager).await?;
        self.create_commits(manager).await?;
        self.create_pulls(manager).await?;
        self.create_issues(manager).await?;
        self.create_changelogs(manager).await?;
        self.create_users(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Changelogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Issues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pulls::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Commits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Repositories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organizations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Integrations::Table).to_owned())
            .await?;
        Ok(())
    }
}

impl Migration {
    async fn create_integrations(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Integrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Integrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Integrations::GithubUserId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Integrations::Username).string().not_null())
                    .col(ColumnDef::new(Integrations::OauthToken).text().not_null())
                    .col(ColumnDef::new(Integrations::Status).string().not_null())
                    .col(
                        ColumnDef::new(Integrations::ConnectedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Integrations::LastSyncedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_integrations_github_user_id")
                    .table(Integrations::Table)
                    .col(Integrations::GithubUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_integrations_status")
                    .table(Integrations::Table)
                    .col(Integrations::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_organizations(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Organizations::PlatformId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Organizations::Login).string().not_null())
                    .col(ColumnDef::new(Organizations::Name).string().null())
                    .col(ColumnDef::new(Organizations::Description).text().null())
                    .col(
                        ColumnDef::new(Organizations::SyncedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_organizations_platform_id")
                    .table(Organizations::Table)
                    .col(Organizations::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_repositories(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Repositories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Repositories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Repositories::PlatformId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Repositories::Name).string().not_null())
                    .col(ColumnDef::new(Repositories::FullName).string().not_null())
                    .col(ColumnDef::new(Repositories::Description).text().null())
                    .col(
                        ColumnDef::new(Repositories::SyncedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_repositories_platform_id")
                    .table(Repositories::Table)
                    .col(Repositories::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_repositories_full_name")
                    .table(Repositories::Table)
                    .col(Repositories::FullName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_commits(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commits::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Commits::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Commits::Sha).string().not_null())
                    .col(ColumnDef::new(Commits::Repo).string().not_null())
                    .col(ColumnDef::new(Commits::RepoFullName).string().not_null())
                    .col(ColumnDef::new(Commits::Message).text().not_null())
                    .col(ColumnDef::new(Commits::Author).string().null())
                    .col(
                        ColumnDef::new(Commits::AuthoredAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Commits::SyncedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_commits_sha")
                    .table(Commits::Table)
                    .col(Commits::Sha)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_commits_repo_full_name")
                    .table(Commits::Table)
                    .col(Commits::RepoFullName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_pulls(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pulls::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pulls::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Pulls::PlatformId).big_integer().not_null())
                    .col(ColumnDef::new(Pulls::Number).big_integer().not_null())
                    .col(ColumnDef::new(Pulls::Title).text().not_null())
                    .col(ColumnDef::new(Pulls::State).string().not_null())
                    .col(ColumnDef::new(Pulls::Repo).string().not_null())
                    .col(ColumnDef::new(Pulls::RepoFullName).string().not_null())
                    .col(
                        ColumnDef::new(Pulls::SyncedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pulls_platform_id")
                    .table(Pulls::Table)
                    .col(Pulls::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pulls_repo_full_name")
                    .table(Pulls::Table)
                    .col(Pulls::RepoFullName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_issues(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Issues::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Issues::PlatformId).big_integer().not_null())
                    .col(ColumnDef::new(Issues::Number).big_integer().null())
                    .col(ColumnDef::new(Issues::Title).text().not_null())
                    .col(ColumnDef::new(Issues::State).string().not_null())
                    .col(ColumnDef::new(Issues::Repo).string().not_null())
                    .col(ColumnDef::new(Issues::RepoFullName).string().not_null())
                    .col(
                        ColumnDef::new(Issues::SyncedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issues_platform_id")
                    .table(Issues::Table)
                    .col(Issues::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issues_repo_full_name")
                    .table(Issues::Table)
                    .col(Issues::RepoFullName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_changelogs(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Changelogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Changelogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Changelogs::PlatformId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Changelogs::Event).string().not_null())
                    .col(ColumnDef::new(Changelogs::Actor).string().null())
                    .col(
                        ColumnDef::new(Changelogs::IssueNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Changelogs::Repo).string().not_null())
                    .col(ColumnDef::new(Changelogs::RepoFullName).string().not_null())
                    .col(
                        ColumnDef::new(Changelogs::SyncedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_changelogs_platform_id")
                    .table(Changelogs::Table)
                    .col(Changelogs::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_changelogs_repo_issue")
                    .table(Changelogs::Table)
                    .col(Changelogs::RepoFullName)
                    .col(Changelogs::IssueNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn create_users(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::PlatformId).big_integer().not_null())
                    .col(ColumnDef::new(Users::Login).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().null())
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(ColumnDef::new(Users::Organization).string().not_null())
                    .col(
                        ColumnDef::new(Users::SyncedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_platform_id")
                    .table(Users::Table)
                    .col(Users::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_organization")
                    .table(Users::Table)
                    .col(Users::Organization)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
#[sea_orm(iden = "integrations")]
enum Integrations {
    Table,
    Id,
    GithubUserId,
    Username,
    OauthToken,
    Status,
    ConnectedAt,
    LastSyncedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "organizations")]
enum Organizations {
    Table,
    Id,
    PlatformId,
    Login,
    Name,
    Description,
    SyncedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "repositories")]
enum Repositories {
    Table,
    Id,
    PlatformId,
    Name,
    FullName,
    Description,
    SyncedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "commits")]
enum Commits {
    Table,
    Id,
    Sha,
    Repo,
    RepoFullName,
    Message,
    Author,
    AuthoredAt,
    SyncedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "pulls")]
enum Pulls {
    Table,
    Id,
    PlatformId,
    Number,
    Title,
    State,
    Repo,
    RepoFullName,
    SyncedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "issues")]
enum Issues {
    Table,
    Id,
    PlatformId,
    Number,
    Title,
    State,
    Repo,
    RepoFullName,
    SyncedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "changelogs")]
enum Changelogs {
    Table,
    Id,
    PlatformId,
    Event,
    Actor,
    IssueNumber,
    Repo,
    RepoFullName,
    SyncedAt,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "users")]
enum Users {
    Table,
    Id,
    PlatformId,
    Login,
    Name,
    Email,
    Organization,
    SyncedAt,
}
