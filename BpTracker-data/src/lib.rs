// BP Tracker Data
// This crate holds the persistence seam: storage models, the repository
// trait with its in-memory implementation, and range label windows.

// Data storage models
pub mod models;

// Range label → lookback window
pub mod range;

// Repository implementations for data access
pub mod repository;

pub use range::TimeRange;
