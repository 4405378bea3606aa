use crate::models::Project;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected store mutations. Lookup misses are outcomes, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
    #[error("slug '{0}' is already used by another project")]
    DuplicateSlug(String),
}

/// Result of replacing a project by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Result of a confirmed-or-declined delete
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Project),
    Declined,
    NotFound,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read project data from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("project data from {origin} is malformed: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("project data from {origin} uses slug '{slug}' more than once")]
    DuplicateSlug { origin: String, slug: String },
    #[error("project data from {origin} uses id '{id}' more than once")]
    DuplicateId { origin: String, id: String },
}
