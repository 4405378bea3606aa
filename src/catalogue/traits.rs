use crate::catalogue::types::SourceError;
use crate::models::Project;
use async_trait::async_trait;

/// Supplier of the initial project collection for a session.
/// New backends (a CMS export, a remote feed) only need to implement this.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Load the ordered project collection
    async fn load(&self) -> Result<Vec<Project>, SourceError>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}

/// Confirmation step guarding destructive admin actions
pub trait Confirm {
    /// Return `true` to proceed with the action described by `prompt`
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
