pub mod auth;
pub mod catalogue;
pub mod inquiry;
pub mod models;
pub mod routes;
pub mod session;
pub mod settings;

pub use auth::{AuthGate, FileStorage, MemoryStorage, TokenStorage};
pub use catalogue::{filter_projects, FilterState, ProjectSource, ProjectStore};
pub use inquiry::{InquiryForm, InquiryLog};
pub use models::{Inquiry, Project, PropertyStatus, PropertyType};
pub use session::{Session, Step};
