pub mod activity_service;
pub mod camper_service;
pub mod error;
pub mod signup_service;
pub mod validation;

pub use error::ServiceError;
