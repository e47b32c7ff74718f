#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{ OpenApi, payload::Json, Object, ApiResponse };

use crate::handlers::greeting::{self, GreetingRequest};
use crate::utils::errors::RespError;
use crate::utils::mcp_utils::{self, RequestDebug};

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct SayHelloApi;

#[derive(Object)]
pub struct ReqSayHello
{
    name: Option<String>,
}

#[derive(Object, Debug)]
pub struct RespSayHello
{
    message: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqSayHello {
    type Req = ReqSayHello;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(255);
        s.push_str("  Request body:");
        s.push_str("\n    name: ");
        match &self.name {
            Some(name) => s.push_str(name),
            None => s.push_str("<absent>"),
        }
        s
    }
}

// ------------------- HTTP Status Codes -------------------
#[derive(Debug, ApiResponse)]
enum McpResponse {
    #[oai(status = 200)]
    Http200(Json<RespSayHello>),
    #[oai(status = 400)]
    Http400(Json<RespError>),
}

fn make_http_200(resp: RespSayHello) -> McpResponse {
    McpResponse::Http200(Json(resp))
}
fn make_http_400(msg: String) -> McpResponse {
    McpResponse::Http400(Json(RespError::new(msg)))
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl SayHelloApi {
    #[oai(path = "/sayHello", method = "post")]
    async fn say_hello(&self, http_req: &Request, req: Json<ReqSayHello>) -> McpResponse {
        RespSayHello::process(http_req, req.0)
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespSayHello {
    /// Create a new response.
    fn new(message: String) -> Self {
        Self {message}
    }

    /// Process the request.  Binding already produced a plain request value;
    /// validation and formatting are delegated to the pure handler.
    fn process(http_req: &Request, req: ReqSayHello) -> McpResponse {
        // Conditional logging depending on log level.
        mcp_utils::debug_request(http_req, &req);

        match greeting::handle(GreetingRequest { name: req.name }) {
            Ok(resp) => make_http_200(Self::new(resp.message)),
            Err(e) => make_http_400(e.to_string()),
        }
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::Route;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use super::SayHelloApi;

    fn say_hello_app() -> Route {
        let api_service = OpenApiService::new(SayHelloApi, "test", "1.0");
        Route::new().nest("/", api_service)
    }

    #[tokio::test]
    async fn say_hello_greets_by_name() {
        let cli = TestClient::new(say_hello_app());

        let resp = cli
            .post("/sayHello")
            .body_json(&json!({ "name": "Alice" }))
            .send()
            .await;
        resp.assert_status_is_ok();

        let body = resp.json().await;
        body.value()
            .object()
            .get("message")
            .assert_string("Hello, Alice! 👋 Welcome to MCP.");
    }

    #[tokio::test]
    async fn say_hello_rejects_empty_name() {
        let cli = TestClient::new(say_hello_app());

        let resp = cli
            .post("/sayHello")
            .body_json(&json!({ "name": "" }))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);

        let body = resp.json().await;
        body.value()
            .object()
            .get("error")
            .assert_string("Missing 'name' in request body");
    }

    #[tokio::test]
    async fn say_hello_rejects_missing_name_field() {
        let cli = TestClient::new(say_hello_app());

        let resp = cli
            .post("/sayHello")
            .body_json(&json!({}))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);

        let body = resp.json().await;
        body.value()
            .object()
            .get("error")
            .assert_string("Missing 'name' in request body");
    }

    #[tokio::test]
    async fn say_hello_rejects_whitespace_only_name() {
        let cli = TestClient::new(say_hello_app());

        let resp = cli
            .post("/sayHello")
            .body_json(&json!({ "name": "  " }))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);

        let body = resp.json().await;
        body.value()
            .object()
            .get("error")
            .assert_string("Missing 'name' in request body");
    }

    #[tokio::test]
    async fn say_hello_preserves_name_whitespace() {
        let cli = TestClient::new(say_hello_app());

        let resp = cli
            .post("/sayHello")
            .body_json(&json!({ "name": " Bud " }))
            .send()
            .await;
        resp.assert_status_is_ok();

        let body = resp.json().await;
        body.value()
            .object()
            .get("message")
            .assert_string("Hello,  Bud ! 👋 Welcome to MCP.");
    }
}
