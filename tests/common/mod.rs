#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use worktrack::auth::TokenSigner;
use worktrack::server::{AppState, create_router};
use worktrack::store::{AdminSeed, SqliteStore, Store, seed};
use worktrack::types::{Capability, Contract, Role, User};

pub const ADMIN_MAIL: &str = "admin@mydb";
pub const ADMIN_PASSWORD: &str = "admin-password";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

/// An in-process server over a seeded in-memory database.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_signer(TokenSigner::random(Duration::hours(8)))
    }

    pub fn with_signer(signer: TokenSigner) -> Self {
        let store = Arc::new(SqliteStore::open_in_memory().expect("open store"));
        store.initialize().expect("initialize schema");
        seed(
            store.as_ref(),
            &AdminSeed {
                mail: ADMIN_MAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            },
        )
        .expect("seed reserved rows");

        let state = Arc::new(AppState::new(store.clone(), signer));

        Self {
            router: create_router(state),
            store,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("token={token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
        }
    }

    pub async fn get(&self, path: &str, token: &str) -> TestResponse {
        self.send(Method::GET, path, Some(token), None).await
    }

    pub async fn post(&self, path: &str, token: &str, body: Value) -> TestResponse {
        self.send(Method::POST, path, Some(token), Some(body)).await
    }

    pub async fn patch(&self, path: &str, token: &str, body: Value) -> TestResponse {
        self.send(Method::PATCH, path, Some(token), Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: &str) -> TestResponse {
        self.send(Method::DELETE, path, Some(token), None).await
    }

    pub async fn login(&self, mail: &str, password: &str) -> TestResponse {
        self.send(
            Method::POST,
            "/get-token",
            None,
            Some(serde_json::json!({ "mail": mail, "password": password })),
        )
        .await
    }

    /// Logs in and returns the session token.
    pub async fn token(&self, mail: &str, password: &str) -> String {
        let response = self.login(mail, password).await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.body
    }

    pub async fn admin_token(&self) -> String {
        self.token(ADMIN_MAIL, ADMIN_PASSWORD).await
    }

    /// Creates a role with the given capabilities and a user holding it,
    /// then logs in as that user.
    pub async fn user_with(&self, mail: &str, capabilities: &[Capability]) -> (i64, String) {
        let role_id = self
            .store
            .create_role(&Role::with_capabilities(format!("role-{mail}"), capabilities))
            .expect("create role");
        let contract_id = self
            .store
            .create_contract(&Contract {
                contract_id: 0,
                contract_name: format!("contract-{mail}"),
            })
            .expect("create contract");

        let admin = self.admin_token().await;
        let response = self
            .post("/users", &admin, user_body(role_id, contract_id, mail, "pw"))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        let user_id = response.json()["user_id"].as_i64().expect("user_id");

        (user_id, self.token(mail, "pw").await)
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.store.get_user(id).expect("get user")
    }
}

pub fn user_body(role_id: i64, contract_id: i64, mail: &str, password: &str) -> Value {
    serde_json::json!({
        "contract_id": contract_id,
        "role_id": role_id,
        "username": "jdoe",
        "password": password,
        "last_name": "Doe",
        "first_name": "Jane",
        "mail": mail,
        "theoretical_hours_worked": 35,
        "vacation_hours": 80,
    })
}
