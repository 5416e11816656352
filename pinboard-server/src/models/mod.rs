//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns a field-level error, not a panic.

pub mod validation;
pub mod photo;
pub mod photo_id;
pub mod search;

pub use validation::{FieldError, Location, ValidationError};
pub use photo::{Photo, PinnedPhoto, SearchResult};
pub use photo_id::PhotoId;
pub use search::{SearchParams, DEFAULT_PAGE, DEFAULT_PER_PAGE};
