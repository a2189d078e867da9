//! Wire types for the HTTP API.
//!
//! Field names are camelCase on the wire. Request bodies reject unknown
//! fields.

mod auth;
mod common;
mod training;
mod training_result;
mod user;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisteredUserResponse};
pub use common::{HealthResponse, IdQuery, MessageResponse, OneOrMany};
pub use training::{CreateTrainingRequest, TrainingResponse, UpdateTrainingRequest};
pub use training_result::{
    CreateTrainingResultRequest, TrainingResultQuery, TrainingResultResponse,
    UpdateTrainingResultRequest,
};
pub use user::ProfileResponse;

#[cfg(test)]
mod tests {
    use super::{
        CreateTrainingRequest, CreateTrainingResultRequest, HealthResponse, LoginRequest,
        LoginResponse, MessageResponse, ProfileResponse, RegisterRequest, RegisteredUserResponse,
        TrainingResponse, TrainingResultResponse, UpdateTrainingRequest,
        UpdateTrainingResultRequest,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        RegisterRequest::export(&config)?;
        RegisteredUserResponse::export(&config)?;
        LoginRequest::export(&config)?;
        LoginResponse::export(&config)?;
        ProfileResponse::export(&config)?;
        CreateTrainingRequest::export(&config)?;
        UpdateTrainingRequest::export(&config)?;
        TrainingResponse::export(&config)?;
        CreateTrainingResultRequest::export(&config)?;
        UpdateTrainingResultRequest::export(&config)?;
        TrainingResultResponse::export(&config)?;
        MessageResponse::export(&config)?;
        HealthResponse::export(&config)?;
        ErrorResponse::export(&config)?;

        Ok(())
    }
}
