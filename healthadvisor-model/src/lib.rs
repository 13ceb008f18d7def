pub mod choice;
pub mod profile;
pub mod prompt;
pub mod survey;

pub use profile::{FieldValue, HealthProfile};
pub use survey::{Survey, ValidationError};
