use actix_web::{get, http::header, post, web, HttpResponse, Responder};
use log::{debug, error, warn};
use sqlx::SqlitePool;

use crate::databases::chat::messagedb::{get_conversation, get_conversation_summaries, insert_message};
use crate::databases::chat::messages::SendMessageRequest;
use crate::services::clock::MessageClock;
use crate::services::hub::ConversationHub;

#[post("/api/message/send")]
pub async fn send_message(
    db: web::Data<SqlitePool>,
    clock: web::Data<MessageClock>,
    hub: web::Data<ConversationHub>,
    body: Result<web::Json<SendMessageRequest>, actix_web::Error>,
) -> impl Responder {
    let request = match body {
        Ok(json) => json.into_inner(),
        Err(e) => {
            debug!("Rejected message body: {}", e);
            return HttpResponse::BadRequest().body("Message cannot be null");
        }
    };

    if request.sender_id == request.receiver_id {
        warn!("User {} tried to message themselves", request.sender_id);
        return HttpResponse::BadRequest().body("Sender and receiver cannot be the same user.");
    }

    let result = insert_message(
        db.get_ref(),
        request.sender_id,
        request.receiver_id,
        &request.content,
        clock.now(),
    )
    .await;

    match result {
        Ok(saved) => {
            hub.publish(&saved);
            let location = format!("/api/message/{}/{}", saved.sender_id, saved.receiver_id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(saved)
        }
        Err(e) => {
            error!("Insert message error: {:?}", e);
            HttpResponse::InternalServerError().body("Failed to save message")
        }
    }
}

#[get("/api/message/conversations/{user_id}")]
pub async fn get_conversations(
    db: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> impl Responder {
    let user_id = path.into_inner();

    match get_conversation_summaries(db.get_ref(), user_id).await {
        Ok(summaries) => HttpResponse::Ok().json(summaries),
        Err(e) => {
            error!("Error fetching conversations for {}: {:?}", user_id, e);
            HttpResponse::InternalServerError().body("Failed to fetch conversations")
        }
    }
}

#[get("/api/message/{sender_id}/{receiver_id}")]
pub async fn get_messages(
    db: web::Data<SqlitePool>,
    path: web::Path<(i64, i64)>,
) -> impl Responder {
    let (sender_id, receiver_id) = path.into_inner();

    match get_conversation(db.get_ref(), sender_id, receiver_id).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => {
            error!("Error fetching messages: {:?}", e);
            HttpResponse::InternalServerError().body("Failed to fetch messages")
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(send_message);
    // Must precede get_messages, which would otherwise claim "conversations/{id}".
    cfg.service(get_conversations);
    cfg.service(get_messages);
}
