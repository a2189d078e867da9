//! Application services and ports.

#![forbid(unsafe_code)]

mod lookup;
mod token_service;
mod training_result_service;
mod training_service;
mod user_service;

#[cfg(test)]
mod test_fakes;

pub use lookup::Found;
pub use token_service::{AccessTokenClaims, IssuedToken, TokenCodec, TokenService};
pub use training_result_service::{
    CreateTrainingResultInput, NewTrainingResult, OwnedTrainingResult, TrainingResultChanges,
    TrainingResultQuery, TrainingResultRecord, TrainingResultRepository, TrainingResultService,
};
pub use training_service::{
    CreateTrainingInput, NewTraining, TrainingChanges, TrainingRecord, TrainingRepository,
    TrainingService,
};
pub use user_service::{
    CredentialCheck, NewUser, PasswordHasher, RegisterParams, UserProfile, UserRecord,
    UserRepository, UserService,
};
