pub mod admin;
pub mod user;

use actix_web::{http::header::ContentType, middleware::from_fn, web::{self, ServiceConfig}, HttpRequest, HttpResponse};

use crate::{errors::ApiError, validation::Field, middlewares::auth::{admin_gate, user_gate}, models::account::{check_account_exists, create_account, find_account, is_duplicate_username}, schema::{Credentials, Role}, utils::{hash_password, issue_token, verify_password}, GlobalState};

/// Mounts every route. Shared by `main` and the test harness.
pub fn configure(cfg: &mut ServiceConfig){
    cfg
    .service(
        web::scope("/admin")
        .app_data(json_config(|| ApiError::Conflict))
        .service(admin::signup_admin)
        .service(admin::login_admin)
        .service(
            // matches /courses as well as /courses/{course_id}
            web::scope("/courses")
            .app_data(json_config(|| ApiError::InvalidField(Field::Title)))
            .wrap(from_fn(admin_gate))
            .service(admin::create_course_handler)
            .service(admin::update_course_handler)
            .service(admin::get_all_courses_handler)
        )
    )
    .service(
        web::scope("/users")
        .app_data(json_config(|| ApiError::Conflict))
        .service(user::signup_user)
        .service(user::login_user)
        .service(
            web::scope("/courses")
            .wrap(from_fn(user_gate))
            .service(user::get_published_courses_handler)
            .service(user::purchase_course_handler)
        )
        .service(
            web::scope("/purchasedCourses")
            .wrap(from_fn(user_gate))
            .service(user::purchased_courses_handler)
        )
    );
}

/// A body that is not a JSON object at all gets the same answer as an empty one:
/// a nameless signup conflicts, a course without a title fails validation.
fn json_config(rejection: fn() -> ApiError) -> web::JsonConfig{
    web::JsonConfig::default().error_handler(move |err, _req| {
        tracing::debug!(error = %err, "unreadable request body");
        rejection().into()
    })
}

/// Signup flow for either account kind.
async fn signup(data:&GlobalState, role:Role, credentials:Credentials) -> Result<HttpResponse, ApiError>{

    let username = credentials.username
        .filter(|name| !name.trim().is_empty())
        .ok_or(ApiError::Conflict)?;

    let password = credentials.password
        .filter(|pw| !pw.trim().is_empty())
        .ok_or(ApiError::InvalidCredentials)?;

    let exists = check_account_exists(&data.pool, role, &username).await
        .map_err(ApiError::internal("Internal Server Error"))?;

    if exists {
        return Err(ApiError::Conflict);
    }

    let password_hash = web::block(move || hash_password(&password)).await
        .map_err(ApiError::internal("Internal Server Error"))?
        .map_err(ApiError::internal("Internal Server Error"))?;

    match create_account(&data.pool, role, &username, &password_hash).await {
        Ok(id) => {
            tracing::info!(%role, %username, id, "account created");
            Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body("User Created Successfully!!"))
        },
        Err(e) if is_duplicate_username(&e) => Err(ApiError::Conflict),
        Err(e) => Err(ApiError::internal("Internal Server Error")(e)),
    }
}

/// Login flow for either account kind. Credentials travel as request headers.
async fn login(data:&GlobalState, role:Role, req:&HttpRequest) -> Result<HttpResponse, ApiError>{

    let username = credential_header(req, "username").ok_or(ApiError::InvalidCredentials)?;
    let password = credential_header(req, "password").ok_or(ApiError::InvalidCredentials)?;

    let account = find_account(&data.pool, role, &username).await
        .map_err(ApiError::internal("Internal Server Error"))?
        .ok_or(ApiError::AccountNotFound)?;

    let stored_hash = account.password;
    let is_valid = web::block(move || verify_password(&password, &stored_hash)).await
        .map_err(ApiError::internal("Internal Server Error"))?;

    if is_valid.is_err() {
        tracing::info!(%role, %username, "login rejected");
        return Err(ApiError::AccountNotFound);
    }

    let token = issue_token(role, &account.username, data.config.jwt_secret(role), data.config.token_ttl_secs)
        .map_err(ApiError::internal("Internal Server Error"))?;

    tracing::info!(%role, %username, "logged in");
    Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(token))
}

fn credential_header(req:&HttpRequest, name:&str) -> Option<String>{
    req.headers()
        .get(name)
        .and_then(|val| val.to_str().ok())
        .filter(|val| !val.trim().is_empty())
        .map(str::to_string)
}
