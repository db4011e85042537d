pub mod api;
pub mod session;
pub mod view;

pub use api::{ClientError, HttpMessageApi, MessageApi};
pub use session::Session;
pub use view::{Alignment, Bubble, ConversationView, ViewState, POLL_INTERVAL};
