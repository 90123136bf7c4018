//! Application use cases

pub mod ask_model;
