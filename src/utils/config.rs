#![forbid(unsafe_code)]

use anyhow::{Result, anyhow};
use log::{info, error, LevelFilter};
use serde::Deserialize;
use std::{env, fs, path::Path};
use toml;
use fs_mistrust::Mistrust;
use std::os::unix::fs::PermissionsExt;
use lazy_static::lazy_static;
use structopt::StructOpt;

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};

// MCP demo utilities
use crate::utils::{mcp_utils, errors::Errors};

use super::mcp_utils::get_absolute_path;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Directory and file locations. Unless otherwise noted, all files and directories
// are relative to the root directory.
const ENV_MCP_ROOT_DIR     : &str = "MCP_ROOT_DIR";
const DEFAULT_ROOT_DIR     : &str = "~/.mcp";
const CONFIG_DIR           : &str = "/config";
const LOGS_DIR             : &str = "/logs";
const CERTS_DIR            : &str = "/certs";
const LOG4RS_CONFIG_FILE   : &str = "/log4rs.yml"; // relative to config dir
const MCP_CONFIG_FILE      : &str = "/mcp.toml";   // relative to config dir

// TLS certificate file names, relative to the certs dir.
pub const CERT_PEM_FILE    : &str = "/cert.pem";
pub const KEY_PEM_FILE     : &str = "/key.pem";

// Networking.
const DEFAULT_HTTP_ADDR    : &str = "http://localhost";
const DEFAULT_HTTP_PORT    : u16  = 3000;

// Service title advertised in the generated openapi document.
const DEFAULT_TITLE        : &str = "MCP Server Demo";

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Assign the command line arguments BEFORE RUNTIME_CTX is initialized in main.
lazy_static! {
    pub static ref MCP_ARGS: McpArgs = init_mcp_args();
}

// Calculate the data directories BEFORE RUNTIME_CTX is initialized in main.
lazy_static! {
    pub static ref MCP_DIRS: McpDirs = init_mcp_dirs();
}

// ***************************************************************************
//                             Directory Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// McpDirs:
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
pub struct McpDirs {
    pub root_dir: String,
    pub config_dir: String,
    pub logs_dir: String,
    pub certs_dir: String,
}

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// CommandLineArgs:
// ---------------------------------------------------------------------------
#[derive(Debug, StructOpt)]
#[structopt(name = "mcp_args", about = "Command line arguments for the MCP demo server.")]
pub struct McpArgs {
    /// Specify the server's root data directory.
    ///
    /// This directory contains all the files the server uses during execution.
    #[structopt(short, long)]
    pub root_dir: Option<String>,

    /// Create the data directories and then exit.
    ///
    /// The data directories will be rooted at a root directory calculated
    /// using the following priority order:
    ///
    ///   1. If set, the value of the MCP_ROOT_DIR environment,
    ///
    ///   2. Otherwise, if set, the value of the --root_dir command line argument,
    ///
    ///   3. Otherwise, ~/.mcp
    ///
    #[structopt(short, long)]
    pub create_dirs_only: bool,
}

// ---------------------------------------------------------------------------
// Parms:
// ---------------------------------------------------------------------------
#[derive(Debug)]
#[allow(dead_code)]
pub struct Parms {
    pub config_file: String,
    pub config: Config,
}

// ---------------------------------------------------------------------------
// RuntimeCtx:
// ---------------------------------------------------------------------------
#[derive(Debug)]
#[allow(dead_code)]
pub struct RuntimeCtx {
    pub parms: Parms,
    pub mcp_args: &'static McpArgs,
    pub mcp_dirs: &'static McpDirs,
}

// ---------------------------------------------------------------------------
// Config:
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
pub struct Config {
    pub title: String,
    pub http_addr: String,
    pub http_port: u16,
    pub enable_tls: bool,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            enable_tls: false,
        }
    }
}

// ***************************************************************************
//                            Directory Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_mcp_args:
// ---------------------------------------------------------------------------
/** Get the command line arguments. */
fn init_mcp_args() -> McpArgs {
    let args = McpArgs::from_args();
    println!("{:?}", args);
    args
}

// ---------------------------------------------------------------------------
// init_mcp_dirs:
// ---------------------------------------------------------------------------
/** Calculate the external data directories. */
fn init_mcp_dirs() -> McpDirs {
    // Initialize the mistrust object.
    let mistrust = get_mistrust();

    // Check that each path is absolute and is a directory with the
    // proper permission assign if it exists.  If it doesn't exist,
    // create it.
    let root_dir = get_root_dir();
    check_mcp_dir(&root_dir, "root directory", &mistrust);

    let config_dir = root_dir.clone() + CONFIG_DIR;
    check_mcp_dir(&config_dir, "config directory", &mistrust);

    let logs_dir = root_dir.clone() + LOGS_DIR;
    check_mcp_dir(&logs_dir, "logs directory", &mistrust);

    let certs_dir = root_dir.clone() + CERTS_DIR;
    check_mcp_dir(&certs_dir, "certs directory", &mistrust);

    // Package up and return the directories.
    McpDirs {
        root_dir, config_dir, logs_dir, certs_dir,
    }
}

// ---------------------------------------------------------------------------
// check_mcp_dir:
// ---------------------------------------------------------------------------
/** Check that the path is absolute and, if it exists, that is has the proper
 * permissions assigned.  If it doesn't exist, create it.  The mistrust package
 * creates directories with 0o700 permissions.
 *
 * Any failure results in a panic.
 */
fn check_mcp_dir(dir: &String, msgname: &str, mistrust: &Mistrust ) {
    // Get the path object.
    let path = Path::new(dir);
    if !path.is_absolute() {
        panic!("The {} path must be absolute: {}", msgname, dir);
    }
    if path.exists() {
        // Make sure the path represents a directory.
        if !path.is_dir() {
            panic!("The {} path must be a directory: {}", msgname, dir);
        }

        // Make sure the directory had rwx for owner only.
        let meta = path.metadata().unwrap_or_else(|_| panic!("Unable to read metadata for {}: {}", msgname, dir));
        let perm = meta.permissions().mode();
        if perm & 0o777 != 0o700 {
            panic!("The {} path must be have 0o700 permissions: {}", msgname, dir);
        }
    } else {
        // Create the directory with the correct permissions.
        match mistrust.make_directory(path) {
            Ok(_) => (),
            Err(e) => {
                panic!("Make directory error for {:?}: {}", path, &e.to_string());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// get_mistrust:
// ---------------------------------------------------------------------------
/** Configure a new mistrust object for initial directory processing. */
fn get_mistrust() -> Mistrust {
    // Configure our mistrust object.
    let mistrust = match Mistrust::builder()
        .ignore_prefix(get_absolute_path("~"))
        .trust_group(0)
        .build() {
            Ok(m) => m,
            Err(e) => {
                panic!("Mistrust configuration error: {}", &e.to_string());
            }
        };
    mistrust
}

// ---------------------------------------------------------------------------
// get_root_dir:
// ---------------------------------------------------------------------------
fn get_root_dir() -> String {
    // Order of precedence:
    //  1. Environment variable
    //  2. Command line --root-dir argument
    //  3. Default location
    //
    let root_dir = env::var(ENV_MCP_ROOT_DIR).unwrap_or_else(
        |_| {
            match MCP_ARGS.root_dir.clone() {
                Some(r) => r,
                None => DEFAULT_ROOT_DIR.to_string(),
            }
        });

    // Canonicalize the path.
    get_absolute_path(&root_dir)
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs from the site configuration file when one is installed;
 * otherwise fall back to console logging so the demo runs with no site
 * configuration at all.
 */
pub fn init_log() {
    // Initialize log4rs logging.
    let logconfig = init_log_config();
    if Path::new(&logconfig).is_file() {
        match log4rs::init_file(logconfig.clone(), Default::default()) {
            Ok(_) => (),
            Err(e) => {
                println!("{}", e);
                let s = format!("{}", Errors::Log4rsInitialization(logconfig.clone()));
                panic!("{}", s);
            },
        }
        info!("Log4rs initialized using: {}", logconfig);
    } else {
        init_console_log();
        info!("Log4rs console logging initialized; no configuration file at: {}", logconfig);
    }
}

// ---------------------------------------------------------------------------
// init_console_log:
// ---------------------------------------------------------------------------
/** Install a programmatic console appender at INFO level. */
fn init_console_log() {
    let stdout = ConsoleAppender::builder().build();
    let logconfig = match log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info)) {
            Ok(c) => c,
            Err(e) => {
                println!("{}", e);
                panic!("{}", Errors::Log4rsInitialization("console".to_string()));
            },
        };
    match log4rs::init_config(logconfig) {
        Ok(_) => (),
        Err(e) => {
            println!("{}", e);
            panic!("{}", Errors::Log4rsInitialization("console".to_string()));
        },
    }
}

// ---------------------------------------------------------------------------
// init_log_config:
// ---------------------------------------------------------------------------
fn init_log_config() -> String {
    MCP_DIRS.config_dir.clone() + LOG4RS_CONFIG_FILE
}

/// ***************************************************************************
//                             Parms Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_parms:
// ---------------------------------------------------------------------------
/** Retrieve the application parameters from the configuration file installed
 * in the config data directory.  If the file cannot be read, the built-in
 * defaults are used.
 */
fn get_parms() -> Result<Parms> {
    // Get the config file path from its data directory.
    let config_file = MCP_DIRS.config_dir.clone() + MCP_CONFIG_FILE;

    // Read the configuration file.
    let config_file_abs = mcp_utils::get_absolute_path(&config_file);
    info!("{}", Errors::ReadingConfigFile(config_file_abs.clone()));
    let contents = match fs::read_to_string(&config_file_abs) {
        Ok(c) => c,
        Err(_) => {
            println!("Unable to read configuration at {}. Using default values.", config_file);
            return Ok(Parms { config_file: Default::default(), config: Config::new() });
        }
    };

    // Parse the toml configuration.
    let config : Config = match toml::from_str(&contents) {
        Ok(c)  => c,
        Err(e) => {
            let msg = format!("{}\n   {}", Errors::TOMLParseError(config_file_abs), e);
            error!("{}", msg);
            return Result::Err(anyhow!(msg));
        }
    };

    Ok(Parms { config_file: config_file_abs, config })
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_runtime_context:
// ---------------------------------------------------------------------------
pub fn init_runtime_context() -> RuntimeCtx {
    // If this fails the application aborts.
    let parms = get_parms().expect("FAILED to read configuration file.");
    RuntimeCtx {parms, mcp_args: &MCP_ARGS, mcp_dirs: &MCP_DIRS}
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use crate::utils::config::Config;

    #[test]
    fn print_config() {
        println!("{:?}", Config::new());
    }

    #[test]
    fn default_config_values() {
        let config = Config::new();
        assert_eq!(config.title, "MCP Server Demo");
        assert_eq!(config.http_addr, "http://localhost");
        assert_eq!(config.http_port, 3000);
        assert!(!config.enable_tls);
    }

    #[test]
    fn parse_site_config() {
        let toml_str = r#"
            title = "Greeter"
            http_addr = "http://127.0.0.1"
            http_port = 8080
            enable_tls = false
        "#;
        let config: Config = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(config.title, "Greeter");
        assert_eq!(config.http_addr, "http://127.0.0.1");
        assert_eq!(config.http_port, 8080);
        assert!(!config.enable_tls);
    }
}
