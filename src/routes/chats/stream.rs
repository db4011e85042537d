use actix_web::{get, http::header, web, HttpResponse, Responder};
use futures::stream;
use log::info;

use crate::services::hub::ConversationHub;

/// Server-sent events for one conversation: every message stored after the
/// subscription opens is pushed as a `data:` frame.
#[get("/api/message/{sender_id}/{receiver_id}/stream")]
pub async fn stream_conversation(
    hub: web::Data<ConversationHub>,
    path: web::Path<(i64, i64)>,
) -> impl Responder {
    let (sender_id, receiver_id) = path.into_inner();
    info!("Conversation stream opened for {}/{}", sender_id, receiver_id);

    let subscription = hub.subscribe(sender_id, receiver_id);
    let events = stream::unfold(subscription, |mut subscription| async move {
        let message = subscription.next().await?;
        let frame = serde_json::to_string(&message)
            .map(|json| web::Bytes::from(format!("data: {}\n\n", json)));
        Some((frame, subscription))
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(events)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(stream_conversation);
}
