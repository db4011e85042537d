use actix_web::web;

pub mod chats;
pub mod user;

pub fn init(cfg: &mut web::ServiceConfig) {
    chats::stream::init(cfg);
    chats::conversation::init(cfg);
    user::init(cfg);
}
