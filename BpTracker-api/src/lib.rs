// BP Tracker API lib.rs
//
// Public payloads, the reading service facade and the API documentation.

// Application configuration
pub mod config;

// Data model ↔ domain ↔ payload conversions
pub mod conversions;

// Public payloads
pub mod entities;

// API documentation
pub mod openapi;

// Reading service facade
pub mod service;

pub use config::AppConfig;
pub use service::{create_in_memory_reading_service, ReadingService, ReadingServiceError};
