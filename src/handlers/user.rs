use actix_web::{get, post, web::{self, Json}, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::{errors::ApiError, models::{account::{find_account, Account}, course::{get_course_by_id, get_published_courses}, purchase::{get_purchased_courses, purchase_course}}, schema::{course::{CoursesResponse, PurchasedCoursesResponse}, Credentials, MessageResponse, Principal, Role}, GlobalState};

#[post("/signup")]
async fn signup_user(data:web::Data<GlobalState>, user:Json<Credentials>) -> Result<HttpResponse, ApiError>{
    super::signup(&data, Role::User, user.into_inner()).await
}

#[post("/login")]
async fn login_user(data:web::Data<GlobalState>, req:HttpRequest) -> Result<HttpResponse, ApiError>{
    super::login(&data, Role::User, &req).await
}

#[get("")]
async fn get_published_courses_handler(data:web::Data<GlobalState>) -> Result<HttpResponse, ApiError>{

    let courses = get_published_courses(&data.pool).await
        .map_err(ApiError::internal("Some error occured while fetching all courses"))?;

    Ok(HttpResponse::Ok().json(CoursesResponse{courses}))
}

#[post("/{course_id}")]
async fn purchase_course_handler(data:web::Data<GlobalState>, user:Principal, path:web::Path<String>) -> Result<HttpResponse, ApiError>{

    let course_id = Uuid::parse_str(&path.into_inner()).map_err(|_| ApiError::MalformedId)?;

    let account = caller_account(&data, &user).await?;

    let course = get_course_by_id(&data.pool, &course_id).await
        .map_err(ApiError::internal("Could not purchase the course"))?
        .ok_or(ApiError::CourseNotFound)?;

    let purchase_id = purchase_course(&data.pool, account.id, &course_id).await
        .map_err(ApiError::internal("Could not purchase the course"))?;

    tracing::info!(user = %user.username, course_id = %course.id, purchase_id, "course purchased");

    Ok(HttpResponse::Ok().json(MessageResponse{message: "Course purchased successfully!!".to_string()}))
}

#[get("")]
async fn purchased_courses_handler(data:web::Data<GlobalState>, user:Principal) -> Result<HttpResponse, ApiError>{

    let account = caller_account(&data, &user).await?;

    let purchased_courses = get_purchased_courses(&data.pool, account.id).await
        .map_err(ApiError::internal("Could not fetch purchased courses"))?;

    Ok(HttpResponse::Ok().json(PurchasedCoursesResponse{purchased_courses}))
}

/// The account behind a user token. A token whose account is gone is treated as invalid.
async fn caller_account(data:&GlobalState, user:&Principal) -> Result<Account, ApiError>{
    find_account(&data.pool, user.role, &user.username).await
        .map_err(ApiError::internal("Internal Server Error"))?
        .ok_or(ApiError::InvalidToken)
}
