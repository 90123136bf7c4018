//! Ports (interfaces) implemented by the infrastructure layer

pub mod answer_gateway;
pub mod model_transport;
