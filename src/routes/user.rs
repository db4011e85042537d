use actix_web::{get, web, HttpResponse, Responder};
use log::error;
use sqlx::SqlitePool;

use crate::databases::users::user::SearchQuery;
use crate::databases::users::userdb::{get_user_by_id, search_users};

#[get("/api/user/search")]
pub async fn search(
    db_pool: web::Data<SqlitePool>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let term = match query.query.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => term.to_string(),
        _ => return HttpResponse::BadRequest().body("Search query is required"),
    };

    match search_users(db_pool.get_ref(), &term).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            error!("User search failed for {:?}: {:?}", term, e);
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

#[get("/api/user/{user_id}")]
pub async fn get_user(
    db_pool: web::Data<SqlitePool>,
    user_id: web::Path<i64>,
) -> impl Responder {
    let user_id = user_id.into_inner();

    match get_user_by_id(db_pool.get_ref(), user_id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().body("User not found"),
        Err(e) => {
            error!("Failed to fetch user {}: {:?}", user_id, e);
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(search);
    cfg.service(get_user);
}
