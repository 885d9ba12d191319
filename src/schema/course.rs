use serde::{Deserialize, Serialize};

use crate::{models::course::Course, schema::lenient};

/// Body of course create/update requests. Everything is optional here so a
/// missing or mistyped field is reported by the validation step, in its usual order.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload{
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub published: Option<bool>,
}

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse{
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_link: String,
    pub published: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCourseResponse{
    pub message: String,
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CoursesResponse{
    pub courses: Vec<Course>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedCoursesResponse{
    pub purchased_courses: Vec<Course>,
}
