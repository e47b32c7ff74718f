#![forbid(unsafe_code)]

use poem_openapi::{ OpenApi, payload::Json, Object };

use crate::handlers::info;

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct InfoApi;

#[derive(Object, Debug)]
pub struct RespInfo
{
    info: String,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl InfoApi {
    #[oai(path = "/", method = "get")]
    async fn get_info(&self) -> Json<RespInfo> {
        Json(RespInfo::new(info::handle()))
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespInfo {
    fn new(info: &str) -> Self {
        Self {info: info.to_string()}
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::test::TestClient;
    use poem::Route;
    use poem_openapi::OpenApiService;

    use super::InfoApi;

    #[tokio::test]
    async fn info_describes_the_greeting_route() {
        let api_service = OpenApiService::new(InfoApi, "test", "1.0");
        let app = Route::new().nest("/", api_service);
        let cli = TestClient::new(app);

        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();

        let body = resp.json().await;
        body.value()
            .object()
            .get("info")
            .assert_string("MCP demo: POST /sayHello with { name }");
    }
}
