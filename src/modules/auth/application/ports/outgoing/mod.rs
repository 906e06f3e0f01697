pub mod token_provider;
pub mod user_repository;

pub use token_provider::TokenProvider;
pub use user_repository::{UserRepository, UserRepositoryError};
