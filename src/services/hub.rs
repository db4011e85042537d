use log::warn;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::databases::chat::messages::Message;

pub const HUB_CAPACITY: usize = 256;

/// Fans newly stored messages out to live conversation streams.
#[derive(Debug, Clone)]
pub struct ConversationHub {
    sender: broadcast::Sender<Message>,
}

impl ConversationHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        ConversationHub { sender }
    }

    pub fn publish(&self, message: &Message) {
        // No subscribers is the common case.
        let _ = self.sender.send(message.clone());
    }

    pub fn subscribe(&self, user_a: i64, user_b: i64) -> ConversationSubscription {
        ConversationSubscription {
            receiver: self.sender.subscribe(),
            user_a,
            user_b,
        }
    }
}

impl Default for ConversationHub {
    fn default() -> Self {
        ConversationHub::new(HUB_CAPACITY)
    }
}

pub struct ConversationSubscription {
    receiver: broadcast::Receiver<Message>,
    user_a: i64,
    user_b: i64,
}

impl ConversationSubscription {
    /// Next message between the subscribed pair, or `None` once the hub is gone.
    pub async fn next(&mut self) -> Option<Message> {
        loop {
            match self.receiver.recv().await {
                Ok(message) if message.is_between(self.user_a, self.user_b) => return Some(message),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(
                        "Conversation stream {}/{} lagged, skipped {} messages",
                        self.user_a, self.user_b, skipped
                    );
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
