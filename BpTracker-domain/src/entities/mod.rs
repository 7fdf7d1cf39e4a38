// Domain entities and value objects
pub mod category;
pub mod reading;
pub mod summary;

// Re-export common types for easier imports
pub use category::BloodPressureCategory;
pub use reading::{ParseOutcome, Reading, ReadingSource};
pub use summary::{ReadingStats, Summary, Trend};
