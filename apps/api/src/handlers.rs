pub mod auth;
pub mod health;
pub mod training;
pub mod training_result;
pub mod user;
