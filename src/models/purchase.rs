use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::course::Course;

/// Appends one enrollment. Repeats are stored as separate rows.
pub async fn purchase_course(pool:&SqlitePool, user_id:i64, course_id:&Uuid) -> Result<i64, sqlx::Error>{

    let (id,): (i64,) = sqlx::query_as(
        r#"
            INSERT INTO purchases_table (user_id, course_id)
            VALUES (?, ?)
            RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(course_id.to_string())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// The user's purchases expanded to full course records, oldest first.
pub async fn get_purchased_courses(pool:&SqlitePool, user_id:i64) -> Result<Vec<Course>, sqlx::Error>{

    sqlx::query_as::<_, Course>(
        r#"
            SELECT c.id, c.title, c.description, c.price, c.image_link, c.published
            FROM purchases_table p
            JOIN course_table c ON c.id = p.course_id
            WHERE p.user_id = ?
            ORDER BY p.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
