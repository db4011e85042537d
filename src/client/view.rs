use chrono::NaiveDateTime;
use log::error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::client::api::{ClientError, MessageApi};
use crate::client::session::Session;
use crate::databases::chat::messages::Message;

pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub messages: Vec<Message>,
    pub loading: bool,
    pub receiver_username: String,
    pub draft: String,
    pub sending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            messages: Vec::new(),
            loading: true,
            receiver_username: String::new(),
            draft: String::new(),
            sending: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub message_id: i64,
    pub content: String,
    pub timestamp: NaiveDateTime,
    pub own: bool,
    pub alignment: Alignment,
}

fn project(viewer_id: i64, messages: &[Message]) -> Vec<Bubble> {
    messages
        .iter()
        .map(|message| {
            let own = message.sender_id == viewer_id;
            Bubble {
                message_id: message.id,
                content: message.content.clone(),
                timestamp: message.timestamp,
                own,
                alignment: if own { Alignment::Right } else { Alignment::Left },
            }
        })
        .collect()
}

fn lock(state: &Mutex<ViewState>) -> MutexGuard<'_, ViewState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn refresh(api: &dyn MessageApi, state: &Mutex<ViewState>, viewer_id: i64, receiver_id: i64) {
    let result = api.fetch_messages_between_users(viewer_id, receiver_id).await;

    let mut state = lock(state);
    match result {
        Ok(messages) => state.messages = messages,
        Err(e) => error!("Error fetching messages: {}", e),
    }
    state.loading = false;
}

/// One open conversation between the signed-in user and a counterpart.
///
/// While active, history is re-fetched every poll interval and the last
/// response to arrive replaces the list.
pub struct ConversationView {
    api: Arc<dyn MessageApi>,
    session: Session,
    receiver_id: i64,
    poll_interval: Duration,
    state: Arc<Mutex<ViewState>>,
    poller: Option<JoinHandle<()>>,
}

impl ConversationView {
    pub fn new(api: Arc<dyn MessageApi>, session: Session, receiver_id: i64) -> Self {
        ConversationView {
            api,
            session,
            receiver_id,
            poll_interval: POLL_INTERVAL,
            state: Arc::new(Mutex::new(ViewState::default())),
            poller: None,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn receiver_id(&self) -> i64 {
        self.receiver_id
    }

    pub fn is_active(&self) -> bool {
        self.poller.is_some()
    }

    /// Loads the counterpart's name and history, then keeps polling until
    /// deactivated. Must be called from within a tokio runtime.
    pub fn activate(&mut self) {
        self.deactivate();

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let viewer_id = self.session.id;
        let receiver_id = self.receiver_id;
        let poll_interval = self.poll_interval;

        self.poller = Some(tokio::spawn(async move {
            let mut ticker = time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            let (username, ()) = tokio::join!(
                api.fetch_username_by_id(receiver_id),
                refresh(&*api, &state, viewer_id, receiver_id),
            );
            match username {
                Ok(name) => lock(&state).receiver_username = name,
                Err(e) => error!("Error fetching receiver's username: {}", e),
            }

            loop {
                ticker.tick().await;
                refresh(&*api, &state, viewer_id, receiver_id).await;
            }
        }));
    }

    pub fn deactivate(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }

    /// Switches to another counterpart, dropping the old history and poller.
    pub fn open(&mut self, receiver_id: i64) {
        self.deactivate();
        self.receiver_id = receiver_id;
        *lock(&self.state) = ViewState::default();
        self.activate();
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        lock(&self.state).draft = text.into();
    }

    pub fn state(&self) -> ViewState {
        lock(&self.state).clone()
    }

    pub fn bubbles(&self) -> Vec<Bubble> {
        project(self.session.id, &lock(&self.state).messages)
    }

    /// Sends the current draft. Returns `false` without sending when the draft
    /// is blank or another send is still in flight.
    pub async fn send(&self) -> bool {
        let content = {
            let mut state = lock(&self.state);
            if state.sending || state.draft.trim().is_empty() {
                return false;
            }
            state.sending = true;
            state.draft.clone()
        };

        let outcome = self.deliver(&content).await;

        let mut state = lock(&self.state);
        state.sending = false;
        match outcome {
            Ok(messages) => {
                state.messages = messages;
                state.draft.clear();
                true
            }
            Err(e) => {
                error!("Error sending message: {}", e);
                false
            }
        }
    }

    async fn deliver(&self, content: &str) -> Result<Vec<Message>, ClientError> {
        self.api
            .send_message(self.session.id, self.receiver_id, content)
            .await?;
        self.api
            .fetch_messages_between_users(self.session.id, self.receiver_id)
            .await
    }
}

impl Drop for ConversationView {
    fn drop(&mut self) {
        self.deactivate();
    }
}
