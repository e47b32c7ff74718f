#![forbid(unsafe_code)]

use anyhow::Result;
use lazy_static::lazy_static;
use log::info;
use poem::listener::{Listener, RustlsCertificate, RustlsConfig};
use poem::{listener::TcpListener, Route};
use poem_openapi::OpenApiService;

// MCP demo utilities
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx, MCP_ARGS, MCP_DIRS,
                           CERT_PEM_FILE, KEY_PEM_FILE};
use crate::utils::errors::Errors;
use crate::v1::mcp::info::InfoApi;
use crate::v1::mcp::say_hello::SayHelloApi;

// Modules
mod handlers;
mod utils;
mod v1;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "McpServerDemo"; // for poem logging

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the parameters variable so that is has a 'static lifetime.
// We exit if we can't read our parameters.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // --------------- Initialize Server --------------
    // Announce ourselves.
    println!("Starting mcp_server_demo!");

    // Create the data directories and exit if so directed.
    if MCP_ARGS.create_dirs_only {
        println!("Data directories created under {}.", MCP_DIRS.root_dir);
        return Ok(());
    }

    // Initialize the server.
    mcp_init();

    // --------------- Main Loop Set Up ---------------
    // Assign the advertised base URL.
    let mcp_url = format!("{}:{}",
        RUNTIME_CTX.parms.config.http_addr,
        RUNTIME_CTX.parms.config.http_port);

    // Create a tuple with each of the endpoint API structs.
    let endpoints = (SayHelloApi, InfoApi);
    let api_service =
        OpenApiService::new(endpoints,
                            RUNTIME_CTX.parms.config.title.clone(),
                            option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"))
            .server(mcp_url);

    // Allow the generated openapi specs to be retrieved from the server.
    let spec = api_service.spec_endpoint();
    let spec_yaml = api_service.spec_endpoint_yaml();

    // Create the routes.  The API owns the root so the wire paths stay exactly
    // POST /sayHello and GET /; the interactive explorer mounts at /swagger.
    let addr = format!("{}{}", "0.0.0.0:", RUNTIME_CTX.parms.config.http_port);
    let ui = api_service.swagger_ui();
    let app = Route::new()
        .nest("/swagger", ui)
        .at("/spec", spec)
        .at("/spec_yaml", spec_yaml)
        .nest("/", api_service);

    // ------------------ Main Loop -------------------
    if RUNTIME_CTX.parms.config.enable_tls {
        // Serve TLS with the certificate and key installed in the certs directory.
        let cert = std::fs::read(RUNTIME_CTX.mcp_dirs.certs_dir.clone() + CERT_PEM_FILE)?;
        let key = std::fs::read(RUNTIME_CTX.mcp_dirs.certs_dir.clone() + KEY_PEM_FILE)?;
        poem::Server::new(
            TcpListener::bind(addr).rustls(
                RustlsConfig::new().fallback(
                    RustlsCertificate::new().key(key).cert(cert),
                ),
            ),
        )
        .name(SERVER_NAME)
        .run(app)
        .await
    } else {
        poem::Server::new(TcpListener::bind(addr))
            .name(SERVER_NAME)
            .run(app)
            .await
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// mcp_init:
// ---------------------------------------------------------------------------
/** Initialize all subsystems and data structures other than those needed
 * to configure the main loop processor.
 */
fn mcp_init() {
    // Configure our log.
    init_log();

    // Force the reading of input parameters and initialization of runtime context.
    info!("{}", Errors::InputParms(format!("{:#?}", *RUNTIME_CTX)));

    // Log build info.
    print_version_info();
}

// ---------------------------------------------------------------------------
// print_version_info:
// ---------------------------------------------------------------------------
fn print_version_info() {
    // Log build info.
    info!("{}.", format!("\n*** Running {}={}, RUSTC={}",
                        SERVER_NAME,
                        option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
                        env!("RUSTC_VERSION")),
    );
}
