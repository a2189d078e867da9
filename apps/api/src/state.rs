use vocal_coach_application::{TokenService, TrainingResultService, TrainingService, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub token_service: TokenService,
    pub training_service: TrainingService,
    pub training_result_service: TrainingResultService,
}
