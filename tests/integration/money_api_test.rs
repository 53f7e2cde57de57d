// Money text endpoint tests

use accounting_money::middleware::{ErrorHandler, RequestId, REQUEST_ID_HEADER};
use accounting_money::modules;
use accounting_money::money::MoneyPolicy;
use actix_web::{test, App};
use serde_json::{json, Value};

async fn post(uri: &str, body: Value) -> (u16, Value) {
    let app = test::init_service(
        App::new().configure(|cfg| modules::configure(cfg, MoneyPolicy::default())),
    )
    .await;

    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;

    (status, body)
}

#[actix_web::test]
async fn test_normalize() {
    let (status, body) = post("/api/money/normalize", json!({"value": " 1234,56 "})).await;
    assert_eq!(status, 200);
    assert_eq!(body["value"], "1234.56");

    let (_, body) = post("/api/money/normalize", json!({"value": null})).await;
    assert_eq!(body["value"], "0");

    let (_, body) = post("/api/money/normalize", json!({})).await;
    assert_eq!(body["value"], "0");
}

#[actix_web::test]
async fn test_validate() {
    let (_, body) = post("/api/money/validate", json!({"value": "abc"})).await;
    assert_eq!(body["valid"], false);

    let (_, body) = post("/api/money/validate", json!({"value": "1234.56"})).await;
    assert_eq!(body["valid"], true);

    let (_, body) = post("/api/money/validate", json!({"value": null})).await;
    assert_eq!(body["valid"], true);
}

#[actix_web::test]
async fn test_format() {
    let (status, body) = post("/api/money/format", json!({"value": "-1234,565"})).await;
    assert_eq!(status, 200);
    assert_eq!(body["value"], "-1234.57");

    let (_, body) = post("/api/money/format", json!({"value": "1234.567", "scale": 4})).await;
    assert_eq!(body["value"], "1234.5670");
}

#[actix_web::test]
async fn test_format_rejects_grouped_number() {
    let (status, body) = post("/api/money/format", json!({"value": "1.234,56"})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "INVALID_NUMBER_FORMAT");
}

#[actix_web::test]
async fn test_health_with_middleware() {
    let app = test::init_service(
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .configure(|cfg| modules::configure(cfg, MoneyPolicy::default())),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-ID", "health-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "health-1");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["money"]["workingPrecision"], 28);
}
