//! Storage-specific error type for the in-memory stores.

use barbershop_domain::error::BarbershopError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding the store lock.
    #[error("appointment store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for BarbershopError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_into_storage_variant() {
        let err: BarbershopError = StorageError::Poisoned.into();
        assert!(matches!(err, BarbershopError::Storage(_)));
    }
}
