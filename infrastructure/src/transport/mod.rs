//! Model transport implementations

pub mod bedrock;
