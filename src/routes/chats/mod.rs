pub mod conversation;
pub mod stream;
