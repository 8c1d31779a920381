use thiserror::Error;

// Domain-level errors for word list workflows.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word is required")]
    WordRequired,
    #[error("word store failure: {0}")]
    StorageFailure(String),
}

// Canned error shapes served by the controlled error endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Generic,
    Database,
    Timeout,
    Validation,
    Auth,
    RateLimit,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::Generic,
        ErrorKind::Database,
        ErrorKind::Timeout,
        ErrorKind::Validation,
        ErrorKind::Auth,
        ErrorKind::RateLimit,
    ];

    // Unknown or missing names fall back to the generic shape.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("database") => ErrorKind::Database,
            Some("timeout") => ErrorKind::Timeout,
            Some("validation") => ErrorKind::Validation,
            Some("auth") => ErrorKind::Auth,
            Some("ratelimit") => ErrorKind::RateLimit,
            _ => ErrorKind::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Generic => "generic",
            ErrorKind::Database => "database",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Validation => "validation",
            ErrorKind::Auth => "auth",
            ErrorKind::RateLimit => "ratelimit",
        }
    }
}

// Failures raised on purpose by the uncontrolled error endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatedFault {
    #[error("Database connection lost")]
    DatabaseConnectionLost,
    #[error("Cannot read property of undefined")]
    UndefinedProperty,
    #[error("Array index out of bounds")]
    IndexOutOfBounds,
    #[error("Variable is not defined")]
    UndefinedVariable,
    #[error("Memory error with {items} items")]
    MemoryExhausted { items: usize },
    #[error("Async operation failed after timeout")]
    AsyncRejection,
    #[error("This is an intentional server error for testing purposes")]
    Intentional,
}

impl SimulatedFault {
    // Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SimulatedFault::DatabaseConnectionLost => "database_connection_lost",
            SimulatedFault::UndefinedProperty => "undefined_property",
            SimulatedFault::IndexOutOfBounds => "index_out_of_bounds",
            SimulatedFault::UndefinedVariable => "undefined_variable",
            SimulatedFault::MemoryExhausted { .. } => "memory_exhausted",
            SimulatedFault::AsyncRejection => "async_rejection",
            SimulatedFault::Intentional => "intentional",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_name_is_known_then_matching_kind_is_returned() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_name(Some(kind.as_str())), kind);
        }
    }

    #[test]
    fn when_name_is_unknown_or_missing_then_generic_is_returned() {
        assert_eq!(ErrorKind::from_name(Some("doesnotexist")), ErrorKind::Generic);
        assert_eq!(ErrorKind::from_name(Some("Database")), ErrorKind::Generic);
        assert_eq!(ErrorKind::from_name(None), ErrorKind::Generic);
    }

    #[test]
    fn when_memory_fault_is_displayed_then_item_count_is_included() {
        let fault = SimulatedFault::MemoryExhausted { items: 1_000_000 };

        assert_eq!(fault.to_string(), "Memory error with 1000000 items");
    }
}
