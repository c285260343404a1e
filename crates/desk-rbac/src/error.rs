use desk_auth::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RbacError {
    #[error("organization '{0}' is not available to you")]
    UnknownOrganization(String),

    #[error("project '{0}' is not available to you")]
    UnknownProject(String),

    #[error("project '{project}' does not belong to organization '{organization}'")]
    ProjectOutsideOrganization { project: String, organization: String },

    #[error("no active organization: run `desk context switch-org <id>`")]
    NoActiveOrganization,

    #[error(transparent)]
    Session(#[from] SessionError),
}
