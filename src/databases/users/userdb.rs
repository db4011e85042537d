use sqlx::SqlitePool;

use crate::databases::users::user::User;

pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn search_users(pool: &SqlitePool, query: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username
        FROM users
        WHERE LOWER(username) LIKE '%' || LOWER(?) || '%'
        ORDER BY username ASC
        "#,
    )
    .bind(query)
    .fetch_all(pool)
    .await
}
