pub mod messagedb;
pub mod messages;
