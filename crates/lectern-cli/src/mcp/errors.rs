//! Mapping of library errors onto MCP error codes.

use lectern_core::LibraryError;
use rmcp::ErrorData;

/// Converts a library error into an MCP error.
///
/// Missing resources, refusals and bad input are the caller's problem and
/// map to `invalid_params`; everything else is an `internal_error`.
pub fn to_mcp_error(message: &str, error: &LibraryError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_not_found() || error.is_denied() || matches!(error, LibraryError::InvalidInput { .. })
    {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
