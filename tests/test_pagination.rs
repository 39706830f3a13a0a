//! Pagination policy tests against the listing endpoints.

use actix_web::{test, web, App};
use serde_json::Value;

use rosterd_api::{configure_routes, ApiContext};
use rosterd_store::{NewUser, Store};

async fn seed_users(store: &Store, count: usize) {
    let users = store.users();
    for i in 0..count {
        users
            .create(
                NewUser {
                    username: format!("user{:03}", i),
                    email: format!("user{:03}@example.com", i),
                    first_name: String::new(),
                    last_name: String::new(),
                },
                None,
            )
            .await
            .unwrap();
    }
}

#[actix_web::test]
async fn test_unparameterized_listing_returns_at_most_20_newest_first() {
    let store = Store::open_in_memory().await.unwrap();
    seed_users(&store, 30).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ApiContext::with_defaults(store.clone())))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/v1/api/users").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 20);
    assert_eq!(body["total"], 30);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 20);

    // Ordered by created_at descending
    let stamps: Vec<&str> = items
        .iter()
        .map(|u| u["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = stamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(stamps, sorted);
}

#[actix_web::test]
async fn test_oversized_page_is_clamped_to_100() {
    let store = Store::open_in_memory().await.unwrap();
    seed_users(&store, 120).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ApiContext::with_defaults(store.clone())))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/api/users?size=500")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(body["size"], 100);
    assert_eq!(body["items"].as_array().unwrap().len(), 100);
    assert_eq!(body["total"], 120);
}

#[actix_web::test]
async fn test_page_parameter_advances_through_results() {
    let store = Store::open_in_memory().await.unwrap();
    seed_users(&store, 25).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ApiContext::with_defaults(store.clone())))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/api/users?page=1&size=10")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 10);

    let req = test::TestRequest::get()
        .uri("/v1/api/users?page=2&size=10")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 5);

    let req = test::TestRequest::get()
        .uri("/v1/api/users?page=3&size=10")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_substring_search_respects_pagination() {
    let store = Store::open_in_memory().await.unwrap();
    seed_users(&store, 5).await;
    store
        .users()
        .create(
            NewUser {
                username: "zara".to_string(),
                email: "zara@example.com".to_string(),
                first_name: "Zara".to_string(),
                last_name: "Quinn".to_string(),
            },
            None,
        )
        .await
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ApiContext::with_defaults(store.clone())))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/api/users?q=quinn")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["username"], "zara");
}
