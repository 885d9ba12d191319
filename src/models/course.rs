use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::schema::course::NewCourse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course{
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_link: String,
    pub published: bool,
}

pub async fn create_course(pool:&SqlitePool, course_details:&NewCourse) -> Result<Course, sqlx::Error>{

    let id = Uuid::new_v4().to_string();

    sqlx::query_as::<_, Course>(
        r#"
            INSERT INTO course_table (id, title, description, price, image_link, published)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, price, image_link, published
        "#,
    )
    .bind(id)
    .bind(&course_details.title)
    .bind(&course_details.description)
    .bind(course_details.price)
    .bind(&course_details.image_link)
    .bind(course_details.published)
    .fetch_one(pool)
    .await
}

pub async fn get_course_by_id(pool:&SqlitePool, id:&Uuid) -> Result<Option<Course>, sqlx::Error>{

    sqlx::query_as::<_, Course>(
        r#"
            SELECT id, title, description, price, image_link, published FROM course_table
            WHERE id = ?
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await
}

/// Overwrites all five editable fields. Returns `None` when no course has that id.
pub async fn update_course(pool:&SqlitePool, id:&Uuid, updated_course:&NewCourse) -> Result<Option<Course>, sqlx::Error>{

    sqlx::query_as::<_, Course>(
        r#"
            UPDATE course_table
            SET title = ?, description = ?, price = ?, image_link = ?, published = ?
            WHERE id = ?
            RETURNING id, title, description, price, image_link, published
        "#,
    )
    .bind(&updated_course.title)
    .bind(&updated_course.description)
    .bind(updated_course.price)
    .bind(&updated_course.image_link)
    .bind(updated_course.published)
    .bind(id.to_string())
    .fetch_optional(pool)
    .await
}

pub async fn get_all_courses(pool:&SqlitePool) -> Result<Vec<Course>, sqlx::Error>{

    sqlx::query_as::<_, Course>(
        r#"
            SELECT id, title, description, price, image_link, published FROM course_table
            ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_published_courses(pool:&SqlitePool) -> Result<Vec<Course>, sqlx::Error>{

    sqlx::query_as::<_, Course>(
        r#"
            SELECT id, title, description, price, image_link, published FROM course_table
            WHERE published = TRUE
            ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await
}
