use crate::models::{Inquiry, Project};
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Please fill in all required details (Name, Phone, Email) before downloading the brochure. Missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Contact details typed into a project's inquiry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    pub fn validate(&self) -> Result<(), InquiryError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(InquiryError::MissingFields(missing))
        }
    }
}

/// Append-only lead log, newest first
#[derive(Debug, Default)]
pub struct InquiryLog {
    inquiries: Vec<Inquiry>,
}

impl InquiryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inquiry against `project`. Nothing is stored when validation fails.
    pub fn submit(&mut self, form: InquiryForm, project: &Project) -> Result<&Inquiry, InquiryError> {
        if let Err(err) = form.validate() {
            warn!("Rejected inquiry for {}: {}", project.slug, err);
            return Err(err);
        }

        let inquiry = Inquiry {
            id: Uuid::new_v4().simple().to_string(),
            name: form.name,
            phone: form.phone,
            email: form.email,
            message: form.message,
            project_id: Some(project.id.clone()),
            project_title: Some(project.title.clone()),
            created_at: Utc::now(),
        };

        info!("Inquiry {} received for project {}", inquiry.id, project.id);
        self.inquiries.insert(0, inquiry);
        Ok(&self.inquiries[0])
    }

    pub fn all(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn len(&self) -> usize {
        self.inquiries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inquiries.is_empty()
    }
}
