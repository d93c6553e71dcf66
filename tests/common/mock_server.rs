//! Wiremock stand-ins for the backend and the auth emulator.

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path, path_regex, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Token the mock backend accepts
pub const VALID_TOKEN: &str = "valid-token";

/// Sign-in path served by the mock emulator
pub const SIGN_IN_PATH: &str = "/identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockHttpServer {
    pub server: MockServer,
}

impl MockHttpServer {
    /// Start a new mock HTTP server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of the mock server
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// `host:port` of the mock server, as the harness env vars expect
    pub fn host(&self) -> String {
        self.server
            .uri()
            .trim_start_matches("http://")
            .to_string()
    }

    /// Backend base URL (`/api/`) on this server
    pub fn api_base(&self) -> String {
        format!("{}/api/", self.server.uri())
    }

    /// Full sign-in URL on this server
    pub fn sign_in_url(&self) -> String {
        format!("{}{}?key=foo", self.server.uri(), SIGN_IN_PATH)
    }

    /// Requests received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Mock a GET endpoint returning JSON
    pub async fn mock_get_json(&self, endpoint: &str, response: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(response)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a GET endpoint that sets a cookie
    pub async fn mock_set_cookie(&self, endpoint: &str, cookie: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", cookie))
            .mount(&self.server)
            .await;
    }

    /// Mock the emulator's password sign-in
    pub async fn mock_sign_in(&self, email: &str, password: &str, id_token: &str) {
        Mock::given(method("POST"))
            .and(path(SIGN_IN_PATH))
            .and(query_param("key", "foo"))
            .and(body_json(json!({
                "email": email,
                "password": password,
                "returnSecureToken": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "identitytoolkit#VerifyPasswordResponse",
                "localId": "test-user-uid",
                "email": email,
                "idToken": id_token,
                "refreshToken": "refresh",
                "expiresIn": "3600",
                "registered": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a sign-in rejection with the emulator's error envelope
    pub async fn mock_sign_in_error(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path(SIGN_IN_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": message,
                    "errors": [{"message": message, "reason": "invalid", "domain": "global"}]
                }
            })))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// Mock the emulator's admin account creation for `project_id`
    pub async fn mock_create_account(&self, project_id: &str, local_id: &str) {
        Mock::given(method("POST"))
            .and(path(format!(
                "/identitytoolkit.googleapis.com/v1/projects/{project_id}/accounts"
            )))
            .and(header("authorization", "Bearer owner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "identitytoolkit#SignupNewUserResponse",
                "localId": local_id
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an account-creation rejection
    pub async fn mock_create_account_error(&self, project_id: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path(format!(
                "/identitytoolkit.googleapis.com/v1/projects/{project_id}/accounts"
            )))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": message}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a study-groups backend that requires `Bearer VALID_TOKEN`.
    ///
    /// Group `1` exists, creation returns it, every other id is a 404 and
    /// anything without the token is a 401.
    pub async fn mock_study_groups_backend(&self) {
        let bearer = format!("Bearer {VALID_TOKEN}");
        let group = json!({
            "id": 1,
            "name": "New study group",
            "description": "Description of the new study group.",
            "type": "public"
        });

        Mock::given(method("GET"))
            .and(path("/api/study-groups"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([group.clone()])))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/study-groups/1"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(group.clone()))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/api/study-groups/[^/]+$"))
            .and(header("authorization", bearer.as_str()))
            .respond_with(ResponseTemplate::new(404).set_body_string("Study group not found\n"))
            .with_priority(8)
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/study-groups"))
            .and(header("authorization", bearer.as_str()))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(group))
            .mount(&self.server)
            .await;

        Mock::given(path_regex(r"^/api/"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized\n"))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }
}
