//! IQC Relay Core Library
//! Shared logic for configuration, the relay handlers, and the upstream client

pub mod config;
pub mod relay;
