//! Core value objects

pub mod error;
pub mod model_id;
pub mod question;
