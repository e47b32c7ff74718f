#![forbid(unsafe_code)]

use thiserror::Error;

// ***************************************************************************
//                          Request/Response Entities
// ***************************************************************************
/// The parsed request body of POST /sayHello.  The transport layer binds the
/// raw JSON; a null or absent name arrives here as None.
#[derive(Debug)]
pub struct GreetingRequest {
    pub name: Option<String>,
}

/// The greeting produced for a valid request.
#[derive(Debug, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: String,
}

// ***************************************************************************
//                                  Errors
// ***************************************************************************
/// The only failure this handler can produce.  Its display text is returned
/// verbatim in the error body of the 400 response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing 'name' in request body")]
    MissingName,
}

// ***************************************************************************
//                                 Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// handle:
// ---------------------------------------------------------------------------
/** Validate the request and format the greeting.  A name that is absent,
 * empty, or all whitespace fails validation.  The name interpolated into the
 * greeting is the raw value: only the blank check trims, so surrounding
 * whitespace in a non-blank name is preserved in the output.
 *
 * This function is pure: no logging, no I/O, no shared state.  Repeated calls
 * with identical input produce identical output.
 */
pub fn handle(req: GreetingRequest) -> Result<GreetingResponse, ValidationError> {
    let name = match req.name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(ValidationError::MissingName),
    };

    Ok(GreetingResponse {
        message: format!("Hello, {}! 👋 Welcome to MCP.", name),
    })
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> GreetingRequest {
        GreetingRequest { name: Some(name.to_string()) }
    }

    #[test]
    fn greets_by_name() {
        let resp = handle(named("Alice")).expect("valid name should succeed");
        assert_eq!(resp.message, "Hello, Alice! 👋 Welcome to MCP.");
    }

    #[test]
    fn missing_name_fails() {
        let err = handle(GreetingRequest { name: None }).unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }

    #[test]
    fn empty_name_fails() {
        let err = handle(named("")).unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }

    #[test]
    fn whitespace_only_name_fails() {
        let err = handle(named("  ")).unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }

    #[test]
    fn validation_message_is_fixed() {
        let err = handle(named("   ")).unwrap_err();
        assert_eq!(err.to_string(), "Missing 'name' in request body");
    }

    #[test]
    fn surrounding_whitespace_is_preserved() {
        // The blank check trims; the interpolated name does not.
        let resp = handle(named("  Ada Lovelace ")).expect("non-blank name should succeed");
        assert_eq!(resp.message, "Hello,   Ada Lovelace ! 👋 Welcome to MCP.");
    }

    #[test]
    fn unicode_names_pass_through() {
        let resp = handle(named("Grüße 名前")).expect("unicode name should succeed");
        assert_eq!(resp.message, "Hello, Grüße 名前! 👋 Welcome to MCP.");
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let first = handle(named("Sam")).expect("valid name should succeed");
        let second = handle(named("Sam")).expect("valid name should succeed");
        assert_eq!(first, second);
    }
}
