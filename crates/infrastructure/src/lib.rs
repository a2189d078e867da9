//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_repository;
mod jwt_token_codec;
mod postgres_training_repository;
mod postgres_training_result_repository;
mod postgres_user_repository;

#[cfg(test)]
mod test_support;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_repository::InMemoryRepository;
pub use jwt_token_codec::JwtTokenCodec;
pub use postgres_training_repository::PostgresTrainingRepository;
pub use postgres_training_result_repository::PostgresTrainingResultRepository;
pub use postgres_user_repository::PostgresUserRepository;
