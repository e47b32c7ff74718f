#![forbid(unsafe_code)]

// Fixed guidance returned by GET /.
const INFO_MESSAGE: &str = "MCP demo: POST /sayHello with { name }";

// ---------------------------------------------------------------------------
// handle:
// ---------------------------------------------------------------------------
/** Describe how to call the greeting endpoint.  No input, no failure path. */
pub fn handle() -> &'static str {
    INFO_MESSAGE
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::handle;

    #[test]
    fn info_message_is_fixed() {
        assert_eq!(handle(), "MCP demo: POST /sayHello with { name }");
    }
}
