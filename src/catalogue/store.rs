use crate::catalogue::traits::Confirm;
use crate::catalogue::types::{DeleteOutcome, StoreError, UpdateOutcome};
use crate::models::Project;
use chrono::Utc;
use tracing::{debug, info};

/// How many leading projects the home page features
pub const FEATURED_COUNT: usize = 3;

/// In-memory owner of the session's project collection.
///
/// Newest records sit at the front. All mutation goes through
/// [`create`](Self::create), [`update`](Self::update) and
/// [`delete`](Self::delete).
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    last_id_millis: i64,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            last_id_millis: 0,
        }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn featured(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(FEATURED_COUNT)]
    }

    /// Add a project at the front of the collection.
    ///
    /// The id and both timestamps are assigned here. A blank slug is derived
    /// from the title.
    pub fn create(&mut self, mut record: Project) -> Result<&Project, StoreError> {
        validate(&record)?;
        if record.slug.trim().is_empty() {
            record.slug = slugify(&record.title);
        }
        if self.slug_taken(&record.slug, None) {
            return Err(StoreError::DuplicateSlug(record.slug));
        }

        let now = Utc::now();
        record.id = self.next_id(now.timestamp_millis());
        record.created_at = now;
        record.updated_at = now;

        info!("Created project {} ({})", record.id, record.slug);
        self.projects.insert(0, record);
        Ok(&self.projects[0])
    }

    /// Replace the project whose id is `id` with `record`, keeping the id.
    pub fn update(&mut self, id: &str, mut record: Project) -> Result<UpdateOutcome, StoreError> {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            debug!("Update skipped, no project with id {}", id);
            return Ok(UpdateOutcome::NotFound);
        };

        validate(&record)?;
        if record.slug.trim().is_empty() {
            record.slug = slugify(&record.title);
        }
        if self.slug_taken(&record.slug, Some(id)) {
            return Err(StoreError::DuplicateSlug(record.slug));
        }

        record.id = id.to_string();
        record.updated_at = Utc::now();
        info!("Updated project {} ({})", record.id, record.slug);
        self.projects[index] = record;
        Ok(UpdateOutcome::Updated)
    }

    /// Remove the project with `id` once `confirm` agrees.
    pub fn delete(&mut self, id: &str, confirm: &mut impl Confirm) -> DeleteOutcome {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            debug!("Delete skipped, no project with id {}", id);
            return DeleteOutcome::NotFound;
        };

        let prompt = format!(
            "Are you sure you want to delete '{}'?",
            self.projects[index].title
        );
        if !confirm.confirm(&prompt) {
            debug!("Delete of {} declined", id);
            return DeleteOutcome::Declined;
        }

        let removed = self.projects.remove(index);
        info!("Deleted project {} ({})", removed.id, removed.slug);
        DeleteOutcome::Deleted(removed)
    }

    fn slug_taken(&self, slug: &str, except_id: Option<&str>) -> bool {
        self.projects
            .iter()
            .any(|p| p.slug == slug && Some(p.id.as_str()) != except_id)
    }

    /// Time-derived id, bumped past the previous one and any existing id
    fn next_id(&mut self, now_millis: i64) -> String {
        let mut candidate = now_millis.max(self.last_id_millis + 1);
        while self.find_by_id(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_id_millis = candidate;
        candidate.to_string()
    }
}

fn validate(record: &Project) -> Result<(), StoreError> {
    let required = [
        ("title", &record.title),
        ("city", &record.city),
        ("state", &record.state),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(StoreError::MissingField(name));
        }
    }
    Ok(())
}

/// Lowercase, ASCII-alphanumeric words joined by single hyphens
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
