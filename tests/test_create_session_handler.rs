use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::test;
use qris_payment::domain::merchant::DEFAULT_QRIS_PAYLOAD;
use serde_json::{Value, json};

#[macro_use]
mod support;

use crate::support::TestContext;

async fn post_create(body: Value) -> (StatusCode, Value) {
	let context = TestContext::new();
	let app = test::init_service(context.app()).await;

	let req = test::TestRequest::post()
		.uri("/api/payment/create")
		.set_json(body)
		.to_request();
	let resp = test::call_service(&app, req).await;
	let status = resp.status();
	let body: Value = test::read_body_json(resp).await;

	(status, body)
}

#[actix_web::test]
async fn test_create_session_returns_active_session() {
	let context = TestContext::new();
	let app = test::init_service(context.app()).await;

	let req = test::TestRequest::post()
		.uri("/api/payment/create")
		.set_json(json!({ "amount": 15000 }))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::CREATED);

	let body: Value = test::read_body_json(resp).await;
	let data = &body["data"];

	assert_eq!(body["success"], true);
	assert!(data["id"].as_str().unwrap().starts_with("PAY-"));
	assert_eq!(data["status"], "active");
	assert_eq!(data["amount"], 15000);
	assert_eq!(data["merchantName"], "Maulana Store");
	assert_eq!(data["merchantLocation"], "Kota Tangerang");
	assert_eq!(data["expiresIn"], 60);
	assert!(data.get("paidAt").is_none());
	assert!(data.get("paymentMethod").is_none());

	let payload = data["qrPayload"].as_str().unwrap();
	assert_eq!(payload.len(), DEFAULT_QRIS_PAYLOAD.len() + 4 + 5);
	assert!(payload.contains("5405150005802ID"));

	let stats = context.stats();
	assert_eq!(stats.counters.total, 1);
	assert_eq!(stats.counters.pending, 1);
	assert_eq!(stats.total_sessions, 1);
}

#[actix_web::test]
async fn test_create_session_accepts_max_amount() {
	let (status, body) = post_create(json!({ "amount": 10_000_000 })).await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["data"]["amount"], 10_000_000);
	assert!(
		body["data"]["qrPayload"]
			.as_str()
			.unwrap()
			.contains("540810000000")
	);
}

#[actix_web::test]
async fn test_create_session_rejects_amount_above_limit() {
	let (status, body) = post_create(json!({ "amount": 10_000_001 })).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["success"], false);
	assert_eq!(
		body["error"],
		"Payment amount must not exceed Rp 10.000.000."
	);
}

#[actix_web::test]
async fn test_create_session_rejects_non_positive_amount() {
	for amount in [-1, 0] {
		let (status, body) = post_create(json!({ "amount": amount })).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["success"], false);
		assert_eq!(body["error"], "Payment amount must be greater than 0.");
	}
}

#[actix_web::test]
async fn test_create_session_rejects_missing_amount() {
	let (status, body) = post_create(json!({})).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_create_session_accepts_whole_float_amount() {
	let (status, body) = post_create(json!({ "amount": 15000.0 })).await;

	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["data"]["amount"], 15000);
	assert!(
		body["data"]["qrPayload"]
			.as_str()
			.unwrap()
			.contains("5405150005802ID")
	);
}

#[actix_web::test]
async fn test_create_session_rejects_non_whole_amount() {
	for amount in [json!(1500.5), json!("lots")] {
		let (status, body) = post_create(json!({ "amount": amount })).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["success"], false);
		assert_eq!(body["error"], "Payment amount must be a whole number.");
	}
}

#[actix_web::test]
async fn test_create_session_rejects_malformed_body() {
	let context = TestContext::new();
	let app = test::init_service(context.app()).await;

	let req = test::TestRequest::post()
		.uri("/api/payment/create")
		.insert_header(ContentType::json())
		.set_payload("{\"amount\":")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

	let body: Value = test::read_body_json(resp).await;
	assert_eq!(body["success"], false);
	assert!(
		body["error"]
			.as_str()
			.unwrap()
			.starts_with("Invalid request body")
	);
	assert_eq!(context.stats().counters.total, 0);
}

#[actix_web::test]
async fn test_created_sessions_get_distinct_ids() {
	let context = TestContext::new();
	let app = test::init_service(context.app()).await;

	let first = create_session!(&app, 1000);
	let second = create_session!(&app, 1000);

	assert_ne!(first, second);
	assert_eq!(context.stats().counters.total, 2);
}
