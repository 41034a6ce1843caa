//! Bearer token authentication.

pub mod errors;
pub mod models;
mod repository;
pub mod service;
pub mod token;

pub use errors::AuthServiceError;
pub use models::*;
pub use service::*;
pub use token::{generate_api_token, hash_api_token};
