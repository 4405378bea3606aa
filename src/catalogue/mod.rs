pub mod filter;
pub mod sources;
pub mod store;
pub mod traits;
pub mod types;

pub use filter::{available_cities, filter_projects, FilterState, DEFAULT_MAX_PRICE};
pub use sources::{JsonFileSource, SeedSource};
pub use store::{slugify, ProjectStore, FEATURED_COUNT};
pub use traits::{Confirm, ProjectSource};
pub use types::{DeleteOutcome, SourceError, StoreError, UpdateOutcome};
