// Data storage models
pub mod reading;

pub use reading::{NewReading, ReadingType, StoredReading, UserId};
