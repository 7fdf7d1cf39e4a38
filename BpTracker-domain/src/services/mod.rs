// Domain services
// Pure functions turning a set of readings into statistics, a category,
// a trend, alerts and advice.
pub mod aggregator;
pub mod alerts;
pub mod classifier;
pub mod suggestions;
pub mod summary;
pub mod trend;

pub use aggregator::{aggregate, aggregate_with_averages, Averages};
pub use alerts::{alerts, is_hypertensive_crisis};
pub use classifier::{classify, classify_reading};
pub use suggestions::suggest;
pub use summary::summarize;
pub use trend::trend;
