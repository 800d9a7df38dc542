//! Confirmation messages for operations without a resource to show.

use std::fmt;

/// A one-line success or failure message, e.g. after a schedule rebuild or
/// an import.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
