//! Common re-exports for convenient entity usage.

pub use super::changelog::{
    ActiveModel as ChangelogActiveModel, Column as ChangelogColumn, Entity as Changelog,
    Model as ChangelogModel,
};
pub use super::commit::{
    ActiveModel as CommitActiveModel, Column as CommitColumn, Entity as Commit,
    Model as CommitModel,
};
pub use super::integration::{
    ActiveModel as IntegrationActiveModel, Column as IntegrationColumn, Entity as Integration,
    Model as IntegrationModel,
};
pub use super::integration_status::IntegrationStatus;
pub use super::issue::{
    ActiveModel as IssueActiveModel, Column as IssueColumn, Entity as Issue, Model as IssueModel,
};
pub use super::organization::{
    ActiveModel as OrganizationActiveModel, Column as OrganizationColumn, Entity as Organization,
    Model as OrganizationModel,
};
pub use super::pull::{
    ActiveModel as PullActiveModel, Column as PullColumn, Entity as Pull, Model as PullModel,
};
pub use super::repo::{
    ActiveModel as RepoActiveModel, Column as RepoColumn, Entity as Repo, Model as RepoModel,
};
pub use super::user::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as User, Model as UserModel,
};
