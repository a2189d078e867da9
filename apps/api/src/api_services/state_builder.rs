use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;
use vocal_coach_application::{
    PasswordHasher, TokenCodec, TokenService, TrainingRepository, TrainingResultRepository,
    TrainingResultService, TrainingService, UserRepository, UserService,
};
use vocal_coach_core::AppError;
use vocal_coach_infrastructure::{
    Argon2PasswordHasher, JwtTokenCodec, PostgresTrainingRepository,
    PostgresTrainingResultRepository, PostgresUserRepository,
};

use crate::api_config::ApiConfig;
use crate::state::AppState;

/// Adapters the application services are wired from.
pub struct StatePorts {
    pub user_repository: Arc<dyn UserRepository>,
    pub training_repository: Arc<dyn TrainingRepository>,
    pub training_result_repository: Arc<dyn TrainingResultRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_codec: Arc<dyn TokenCodec>,
    pub token_ttl: Duration,
}

pub fn build_app_state(ports: StatePorts) -> AppState {
    AppState {
        user_service: UserService::new(ports.user_repository.clone(), ports.password_hasher),
        token_service: TokenService::new(ports.token_codec, ports.user_repository)
            .with_token_ttl(ports.token_ttl),
        training_service: TrainingService::new(ports.training_repository),
        training_result_service: TrainingResultService::new(ports.training_result_repository),
    }
}

pub fn build_postgres_state(pool: PgPool, config: &ApiConfig) -> Result<AppState, AppError> {
    Ok(build_app_state(StatePorts {
        user_repository: Arc::new(PostgresUserRepository::new(pool.clone())),
        training_repository: Arc::new(PostgresTrainingRepository::new(pool.clone())),
        training_result_repository: Arc::new(PostgresTrainingResultRepository::new(pool)),
        password_hasher: Arc::new(Argon2PasswordHasher::new()?),
        token_codec: Arc::new(JwtTokenCodec::new(&config.jwt_secret)?),
        token_ttl: Duration::days(config.access_token_ttl_days),
    }))
}
