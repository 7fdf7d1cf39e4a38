// Repository module structure
pub mod errors;
mod in_memory;
mod readings;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryReadingRepository;
pub use readings::ReadingRepositoryTrait;

// Mock repository for tests in dependent crates
#[cfg(feature = "mock")]
pub use readings::MockReadingRepositoryTrait;
