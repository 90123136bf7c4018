//! Application layer for bedrock-playground
//!
//! Defines the ports through which the dispatcher talks to the outside world
//! and the use case that drives a single question/answer exchange.
//!
//! The dependency direction follows the usual rule: this crate knows the
//! domain, and the infrastructure layer implements the port traits defined
//! here.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::answer_gateway::{AnswerGateway, GatewayError, ParseError};
pub use ports::model_transport::{ModelTransport, TransportError};
pub use use_cases::ask_model::{AskError, AskModelInput, AskModelUseCase};
