#![forbid(unsafe_code)]

use poem_openapi::Object;
use thiserror::Error;

/// Error enumerates the errors returned by this application.
#[derive(Error, Debug)]
pub enum Errors {
    /// Input parameter logging.
    #[error("mcp_server_demo input parameters:\n{}", .0)]
    InputParms(String),

    /// Inaccessible logger configuration file.
    #[error("Unable to access the Log4rs configuration file: {}", .0)]
    Log4rsInitialization(String),

    #[error("Reading application configuration file: {}", .0)]
    ReadingConfigFile(String),

    #[error("Unable to parse TOML file: {}", .0)]
    TOMLParseError(String),
}

// ***************************************************************************
//                             HTTP Error Body
// ***************************************************************************
/// JSON body returned with every non-2xx response:  {"error": "<reason>"}.
#[derive(Object, Debug)]
pub struct RespError
{
    error: String,
}

impl RespError {
    pub fn new(error: String) -> Self {
        Self {error}
    }
}
