// Public entities for the BP Tracker API
// This module contains data structures that are shared across the application boundary

// Reading payloads
pub mod readings;

// Summary payload
pub mod summary;

// Common entities for error handling
pub mod common;

pub use common::PublicErrorResponse;
pub use readings::{
    CreateReadingRequest, GraphPointResponse, ParsedReadingResponse, ReadingResponse,
    VoiceInputRequest,
};
pub use summary::SummaryResponse;
