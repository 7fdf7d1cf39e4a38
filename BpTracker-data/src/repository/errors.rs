use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Mutex lock error
    #[error("Mutex lock error: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::MutexLock(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_poisoned_lock_maps_to_mutex_error() {
        let lock = Arc::new(Mutex::new(0));
        let poisoner = Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let error = RepositoryError::from(lock.lock().unwrap_err());
        assert!(matches!(error, RepositoryError::MutexLock(_)));
    }

    #[test]
    fn test_error_messages() {
        for (error, expected) in [
            (RepositoryError::Unavailable("offline".to_string()), "Storage unavailable: offline"),
            (RepositoryError::MutexLock("poisoned".to_string()), "Mutex lock error: poisoned"),
        ] {
            assert_eq!(error.to_string(), expected);
        }
    }
}
