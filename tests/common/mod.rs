#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use social_api::databases::prepare_schema;
use social_api::services::clock::MessageClock;
use social_api::services::hub::ConversationHub;

// A single long-lived connection keeps the in-memory database alive.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    prepare_schema(&pool).await.expect("schema");
    pool
}

pub fn test_clock() -> MessageClock {
    MessageClock::new(chrono_tz::Europe::Oslo)
}

pub fn test_hub() -> ConversationHub {
    ConversationHub::new(16)
}

pub async fn seed_users(pool: &SqlitePool, names: &[&str]) {
    for name in names {
        sqlx::query("INSERT INTO users (username) VALUES (?)")
            .bind(*name)
            .execute(pool)
            .await
            .expect("insert user");
    }
}

pub async fn message_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(pool)
        .await
        .expect("count messages")
}
