mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};

use social_api::databases::users::user::User;

#[actix_web::test]
async fn user_lookup_by_id() {
    let pool = common::test_pool().await;
    common::seed_users(&pool, &["ray", "maria"]).await;
    let app = test::init_service(App::new().configure(social_api::configure(
        pool,
        common::test_clock(),
        common::test_hub(),
    )))
    .await;

    let req = test::TestRequest::get().uri("/api/user/2").to_request();
    let user: User = test::call_and_read_body_json(&app, req).await;
    assert_eq!(user, User { id: 2, username: "maria".to_string() });

    let req = test::TestRequest::get().uri("/api/user/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn search_is_case_insensitive_and_sorted() {
    let pool = common::test_pool().await;
    common::seed_users(&pool, &["Rayna", "bob", "ray"]).await;
    let app = test::init_service(App::new().configure(social_api::configure(
        pool,
        common::test_clock(),
        common::test_hub(),
    )))
    .await;

    let req = test::TestRequest::get().uri("/api/user/search?query=RAY").to_request();
    let users: Vec<User> = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["Rayna", "ray"]);
}

#[actix_web::test]
async fn search_requires_a_query() {
    let pool = common::test_pool().await;
    let app = test::init_service(App::new().configure(social_api::configure(
        pool,
        common::test_clock(),
        common::test_hub(),
    )))
    .await;

    for uri in ["/api/user/search", "/api/user/search?query=", "/api/user/search?query=%20"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}
