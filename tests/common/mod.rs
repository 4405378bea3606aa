mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from terranova for tests
pub use terranova::catalogue::{
    filter_projects, DeleteOutcome, FilterState, JsonFileSource, ProjectSource, ProjectStore,
    SeedSource, SourceError, StoreError, UpdateOutcome,
};
pub use terranova::{AuthGate, Project, PropertyStatus, PropertyType, Session, Step};
