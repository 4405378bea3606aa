use crate::catalogue::traits::ProjectSource;
use crate::catalogue::types::SourceError;
use crate::models::Project;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SEED_PROJECTS: &str = include_str!("../../data/projects.json");

/// Parse a JSON array of projects; ids and slugs must each be unique
fn parse_projects(raw: &str, origin: &str) -> Result<Vec<Project>, SourceError> {
    let projects: Vec<Project> = serde_json::from_str(raw).map_err(|source| SourceError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for project in &projects {
        if !ids.insert(project.id.as_str()) {
            return Err(SourceError::DuplicateId {
                origin: origin.to_string(),
                id: project.id.clone(),
            });
        }
        if !slugs.insert(project.slug.as_str()) {
            return Err(SourceError::DuplicateSlug {
                origin: origin.to_string(),
                slug: project.slug.clone(),
            });
        }
    }
    Ok(projects)
}

/// The built-in TerraNova listings, stamped with the session start time
#[derive(Debug, Default)]
pub struct SeedSource;

#[async_trait]
impl ProjectSource for SeedSource {
    async fn load(&self) -> Result<Vec<Project>, SourceError> {
        let mut projects = parse_projects(SEED_PROJECTS, "built-in seed data")?;
        let now = Utc::now();
        for project in &mut projects {
            project.created_at = now;
            project.updated_at = now;
        }
        info!("📋 Loaded {} built-in projects", projects.len());
        Ok(projects)
    }

    fn source_name(&self) -> &'static str {
        "seed"
    }
}

/// Projects read from a JSON array on disk
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ProjectSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Project>, SourceError> {
        debug!("Reading projects from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
        let projects = parse_projects(&raw, &self.path.display().to_string())?;
        info!("Loaded {} projects from {}", projects.len(), self.path.display());
        Ok(projects)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyStatus, PropertyType};

    #[tokio::test]
    async fn seed_data_parses_with_unique_slugs() {
        let projects = SeedSource.load().await.unwrap();
        assert_eq!(projects.len(), 5);

        let mut slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), projects.len());

        let pines = projects
            .iter()
            .find(|p| p.slug == "whispering-pines-resort")
            .unwrap();
        assert_eq!(pines.property_type, PropertyType::Resort);
        assert_eq!(pines.status, PropertyStatus::Sold);
        assert_eq!(pines.roi_models.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }
}
