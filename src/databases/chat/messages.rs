use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl Message {
    /// True when this message belongs to the conversation between `a` and `b`,
    /// whichever of the two sent it.
    pub fn is_between(&self, a: i64, b: i64) -> bool {
        (self.sender_id == a && self.receiver_id == b) || (self.sender_id == b && self.receiver_id == a)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub user_id: i64,
    pub content: String,
    pub timestamp: NaiveDateTime,
    pub is_responded: bool,
}

/// Keeps the latest message per counterpart of `user_id`.
///
/// Equal timestamps resolve to the later-inserted row. The result is ordered
/// most recent first.
pub fn summarize(user_id: i64, messages: &[Message]) -> Vec<ConversationSummary> {
    let mut latest: HashMap<i64, &Message> = HashMap::new();

    for message in messages {
        let counterpart = if message.sender_id == user_id {
            message.receiver_id
        } else if message.receiver_id == user_id {
            message.sender_id
        } else {
            continue;
        };

        let newer = match latest.get(&counterpart) {
            Some(current) => (message.timestamp, message.id) > (current.timestamp, current.id),
            None => true,
        };
        if newer {
            latest.insert(counterpart, message);
        }
    }

    let mut picked: Vec<(i64, &Message)> = latest.into_iter().collect();
    picked.sort_by(|(_, a), (_, b)| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));

    picked
        .into_iter()
        .map(|(counterpart, message)| ConversationSummary {
            user_id: counterpart,
            content: message.content.clone(),
            timestamp: message.timestamp,
            is_responded: message.sender_id == user_id,
        })
        .collect()
}
