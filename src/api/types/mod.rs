//! JIRA API request and response types.
//!
//! Field names follow the REST API's JSON keys. Anything the server may
//! omit is an `Option`, `Vec` or map and is skipped when serializing, so the
//! same types double as partial request payloads.

mod comment;
mod common;
mod fields;
mod issue;
mod link;
mod project;
mod status;
mod user;
mod worklog;

pub use comment::{Comment, CommentPage, CommentVisibility, Comments};
pub use common::{EntityProperty, Pagination, SearchOptions};
pub use fields::{
    Attachment, Component, Epic, Field, FieldSchema, FixVersion, IssueFields, Parent, Progress,
    Sprint, Subtask, TimeTracking, Watcher, Watches,
};
pub(crate) use issue::TransitionsResponse;
pub use issue::{
    Changelog, ChangelogHistory, ChangelogItem, CreateIssueOptions, CreateMetadataPage,
    GetIssueOptions, GetProjectIssueTypeOptions, Issue, IssueRenderedFields, Transition,
    TransitionField, TransitionId, TransitionRequest,
};
pub use link::{IssueLink, IssueLinkType};
pub use project::{
    GetProjectOptions, ListProjectOptions, Project, ProjectCategory, ProjectComponent, Version,
};
pub use status::{IssueType, IssueTypeLevel, Priority, Resolution, Status, StatusCategory};
pub use user::{
    AccountType, ApplicationRole, ApplicationRoles, AvatarUrls, CreateUserOptions,
    FindUsersByQueryOptions, FindUsersOptions, User, UserGroup, UserGroups,
};
pub use worklog::{Worklog, WorklogRecord};
