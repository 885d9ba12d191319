use std::time::Duration;

use actix_web::{test::{self, TestRequest}, App, web, dev::ServiceResponse, Error};
use actix_service::Service;
use actix_http::Request;
use serde_json::json;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::{config::Config, handlers, GlobalState};

pub fn test_config() -> Config {
    Config{
        bind_address: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        admin_jwt_secret: "admin-test-secret".to_string(),
        user_jwt_secret: "user-test-secret".to_string(),
        token_ttl_secs: 3600,
    }
}

/// Full route table over a fresh in-memory database.
pub async fn init() -> (impl Service<Request, Response = ServiceResponse, Error = Error>, SqlitePool) {

    // an in-memory database lives and dies with its connection, so keep exactly one forever
    let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .min_connections(1)
    .idle_timeout(None::<Duration>)
    .max_lifetime(None::<Duration>)
    .connect("sqlite::memory:")
    .await
    .expect("Cant open the in-memory database");

    sqlx::migrate!()
    .run(&pool)
    .await
    .expect("Cant run the migrations");

    let global_state = GlobalState{pool: pool.clone(), config: test_config()};

    let app_data = web::Data::new(global_state);

    let app = test::init_service(
        App::new()
            .app_data(app_data.clone())
            .configure(handlers::configure)
    ).await;

    (app, pool)
}

/// Signs up under `/{scope}/signup`, logs in, and hands back the token.
pub async fn signup_and_login<S>(app:&S, scope:&str, username:&str, password:&str) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    let signup = TestRequest::post()
        .uri(&format!("/{}/signup", scope))
        .set_json(json!({"username": username, "password": password}))
        .send_request(app)
        .await;
    assert!(signup.status().is_success());

    let login = TestRequest::post()
        .uri(&format!("/{}/login", scope))
        .insert_header(("username", username))
        .insert_header(("password", password))
        .send_request(app)
        .await;
    assert!(login.status().is_success());

    let body = test::read_body(login).await;
    String::from_utf8(body.to_vec()).expect("token is utf-8")
}

pub async fn admin_token<S>(app:&S) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    signup_and_login(app, "admin", "root", "root-password").await
}
