use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::databases::chat::messages::{summarize, ConversationSummary, Message};

pub async fn insert_message(
    pool: &SqlitePool,
    sender_id: i64,
    receiver_id: i64,
    content: &str,
    timestamp: NaiveDateTime,
) -> Result<Message, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (sender_id, receiver_id, content, timestamp)
        VALUES (?, ?, ?, ?)
        RETURNING id, sender_id, receiver_id, content, timestamp
        "#,
    )
    .bind(sender_id)
    .bind(receiver_id)
    .bind(content)
    .bind(timestamp)
    .fetch_one(pool)
    .await
}

pub async fn get_conversation(
    pool: &SqlitePool,
    user_a: i64,
    user_b: i64,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, receiver_id, content, timestamp
        FROM messages
        WHERE (sender_id = ? AND receiver_id = ?)
           OR (sender_id = ? AND receiver_id = ?)
        ORDER BY timestamp ASC, id ASC
        "#,
    )
    .bind(user_a)
    .bind(user_b)
    .bind(user_b)
    .bind(user_a)
    .fetch_all(pool)
    .await
}

pub async fn get_conversation_summaries(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<ConversationSummary>, sqlx::Error> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, receiver_id, content, timestamp
        FROM messages
        WHERE sender_id = ? OR receiver_id = ?
        ORDER BY timestamp ASC, id ASC
        "#,
    )
    .bind(user_id)
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(summarize(user_id, &messages))
}
