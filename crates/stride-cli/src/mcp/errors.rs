//! Error handling utilities for the MCP server

use rmcp::ErrorData;
use stride_core::StrideError;

/// Converts a tracker error into an MCP error, keeping the tracker's message.
pub fn to_mcp_error(message: &str, error: &StrideError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_includes_cause() {
        let error = to_mcp_error("Failed to delete session", &StrideError::SessionNotFound { id: 4 });
        assert_eq!(
            error.message,
            "Failed to delete session: Session with ID 4 not found"
        );
    }
}
