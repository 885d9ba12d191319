use actix_web::{get, post, put, web::{self, Json}, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::{errors::ApiError, models::course::{self, create_course}, schema::{course::{CoursePayload, CoursesResponse, CreateCourseResponse}, Credentials, MessageResponse, Principal, Role}, validation::validate_course, GlobalState};

#[post("/signup")]
async fn signup_admin(data:web::Data<GlobalState>, admin:Json<Credentials>) -> Result<HttpResponse, ApiError>{
    super::signup(&data, Role::Admin, admin.into_inner()).await
}

#[post("/login")]
async fn login_admin(data:web::Data<GlobalState>, req:HttpRequest) -> Result<HttpResponse, ApiError>{
    super::login(&data, Role::Admin, &req).await
}

#[post("")]
async fn create_course_handler(data:web::Data<GlobalState>, admin:Principal, payload:Json<CoursePayload>) -> Result<HttpResponse, ApiError>{

    let new_course = validate_course(&payload)?;

    let created = create_course(&data.pool, &new_course).await
        .map_err(ApiError::internal("Could not add the course"))?;

    tracing::info!(admin = %admin.username, course_id = %created.id, "course created");

    Ok(HttpResponse::Ok().json(CreateCourseResponse{
        message: "Course Added successfully!".to_string(),
        id: created.id,
    }))
}

#[put("/{course_id}")]
async fn update_course_handler(data:web::Data<GlobalState>, admin:Principal, path:web::Path<String>, payload:Json<CoursePayload>) -> Result<HttpResponse, ApiError>{

    let updated_course = validate_course(&payload)?;

    let course_id = Uuid::parse_str(&path.into_inner()).map_err(|_| ApiError::MalformedId)?;

    let updated = course::update_course(&data.pool, &course_id, &updated_course).await
        .map_err(ApiError::internal("Could not update course details"))?;

    if updated.is_none() {
        return Err(ApiError::UnknownCourseId);
    }

    tracing::info!(admin = %admin.username, %course_id, "course updated");

    Ok(HttpResponse::Ok().json(MessageResponse{message: "Course Updates Successfully!!".to_string()}))
}

#[get("")]
async fn get_all_courses_handler(data:web::Data<GlobalState>) -> Result<HttpResponse, ApiError>{

    let courses = course::get_all_courses(&data.pool).await
        .map_err(ApiError::internal("Some error occured while fetching all courses"))?;

    Ok(HttpResponse::Ok().json(CoursesResponse{courses}))
}
