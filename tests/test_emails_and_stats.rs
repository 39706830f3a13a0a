//! End-to-end tests for the notification queue and daily statistics
//! endpoints, including a pass of the background executors.

use std::sync::Arc;

use actix_web::{test, web, App};
use chrono::Utc;
use serde_json::{json, Value};

use rosterd_api::{configure_routes, ApiContext};
use rosterd_jobs::{DailyRollupExecutor, EmailDispatchExecutor, JobExecutor, LogEmailSender};
use rosterd_store::{NewUser, Store};

macro_rules! test_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(ApiContext::with_defaults($store.clone())))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_enqueue_then_dispatch_then_list_by_status() {
    let store = Store::open_in_memory().await.unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::post()
        .uri("/v1/api/emails")
        .set_json(json!({
            "recipient": "alice@example.com",
            "subject": "Welcome aboard",
            "content": "Hello!",
            "kind": "WELCOME",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let queued: Value = test::read_body_json(resp).await;
    assert_eq!(queued["status"], "PENDING");
    assert_eq!(queued["kind"], "WELCOME");
    let id = queued["id"].as_i64().unwrap();

    // Only pending rows so far
    let req = test::TestRequest::get()
        .uri("/v1/api/emails?status=SENT")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["total"], 0);

    // One dispatcher pass delivers the queue
    let dispatcher = EmailDispatchExecutor::new(store.emails(), Arc::new(LogEmailSender));
    let outcome = dispatcher.run().await.unwrap();
    assert_eq!(outcome.processed, 1);

    let req = test::TestRequest::get()
        .uri(&format!("/v1/api/emails/{}", id))
        .to_request();
    let sent: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(sent["status"], "SENT");
    assert!(sent["sent_at"].is_string());

    let req = test::TestRequest::get()
        .uri("/v1/api/emails?status=SENT")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["total"], 1);
}

#[actix_web::test]
async fn test_invalid_email_payload_is_400() {
    let store = Store::open_in_memory().await.unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::post()
        .uri("/v1/api/emails")
        .set_json(json!({"recipient": "not-an-address", "subject": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_missing_email_is_404() {
    let store = Store::open_in_memory().await.unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::get().uri("/v1/api/emails/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_rollup_feeds_stats_endpoints() {
    let store = Store::open_in_memory().await.unwrap();
    let app = test_app!(store);

    store
        .users()
        .create(
            NewUser {
                username: "erin".to_string(),
                email: "erin@example.com".to_string(),
                first_name: String::new(),
                last_name: String::new(),
            },
            None,
        )
        .await
        .unwrap();

    let rollup = DailyRollupExecutor::new(store.users(), store.emails(), store.stats());
    rollup.run().await.unwrap();

    let today = Utc::now().date_naive();
    let req = test::TestRequest::get()
        .uri(&format!("/v1/api/stats/daily/{}", today))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let row: Value = test::read_body_json(resp).await;
    assert_eq!(row["user_registrations"], 1);
    assert_eq!(row["emails_sent"], 0);

    let req = test::TestRequest::get().uri("/v1/api/stats/daily").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["total"], 1);
}

#[actix_web::test]
async fn test_stats_listing_rejects_unknown_parameters() {
    let store = Store::open_in_memory().await.unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::get()
        .uri("/v1/api/stats/daily?page=0&size=5")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    // The stats listing takes no filter; a stray parameter is an error
    let req = test::TestRequest::get()
        .uri("/v1/api/stats/daily?q=erin")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_stats_for_unknown_date_is_404_and_bad_date_is_400() {
    let store = Store::open_in_memory().await.unwrap();
    let app = test_app!(store);

    let req = test::TestRequest::get()
        .uri("/v1/api/stats/daily/1999-01-01")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::get()
        .uri("/v1/api/stats/daily/yesterday")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}
