//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod training;
mod training_result;
mod user;

pub use training::TrainingId;
pub use training_result::TrainingResultId;
pub use user::{
    DISPLAY_NAME_MAX_LENGTH, DisplayName, EmailAddress, Gender, PASSWORD_MAX_LENGTH,
    PASSWORD_MIN_LENGTH, validate_password,
};
