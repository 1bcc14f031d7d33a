#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use qris_payment::adapters::web::handlers;
use qris_payment::adapters::web::health_handler::ServerStartedAt;
use qris_payment::domain::clock::Clock;
use qris_payment::domain::merchant::{
	DEFAULT_MERCHANT_LOCATION, DEFAULT_MERCHANT_NAME, DEFAULT_PAYMENT_METHOD,
	DEFAULT_QRIS_PAYLOAD, MerchantProfile,
};
use qris_payment::domain::repository::SessionRepository;
use qris_payment::domain::session::SessionPolicy;
use qris_payment::domain::stats::StatsSnapshot;
use qris_payment::infrastructure::persistence::in_memory_session_store::InMemorySessionStore;
use qris_payment::use_cases::cancel_session::CancelSessionUseCase;
use qris_payment::use_cases::confirm_payment::ConfirmPaymentUseCase;
use qris_payment::use_cases::create_session::CreateSessionUseCase;
use qris_payment::use_cases::expire_sessions::ExpireSessionsUseCase;
use qris_payment::use_cases::get_session::GetSessionUseCase;
use qris_payment::use_cases::get_stats::GetStatsUseCase;
use time::Duration;

use self::clock::ManualClock;

pub mod clock;

/// A store plus a clock the test moves by hand.
pub struct TestContext {
	pub store: InMemorySessionStore,
	pub clock: ManualClock,
}

impl TestContext {
	pub fn new() -> Self {
		Self {
			store: InMemorySessionStore::new(),
			clock: ManualClock::default(),
		}
	}

	pub fn clock(&self) -> Arc<dyn Clock> {
		Arc::new(self.clock.clone())
	}

	pub fn merchant(&self) -> Arc<MerchantProfile> {
		Arc::new(
			MerchantProfile::new(
				DEFAULT_MERCHANT_NAME,
				DEFAULT_MERCHANT_LOCATION,
				DEFAULT_QRIS_PAYLOAD,
				DEFAULT_PAYMENT_METHOD,
			)
			.unwrap(),
		)
	}

	pub fn advance(&self, seconds: i64) {
		self.clock.advance(Duration::seconds(seconds));
	}

	pub fn stats(&self) -> StatsSnapshot {
		self.store.transact(|ledger| ledger.snapshot())
	}

	pub fn expire_sessions_use_case(
		&self,
	) -> ExpireSessionsUseCase<InMemorySessionStore> {
		ExpireSessionsUseCase::new(self.store.clone(), self.clock())
	}

	pub fn app(
		&self,
	) -> App<
		impl ServiceFactory<
			ServiceRequest,
			Config = (),
			Response = ServiceResponse<impl MessageBody + use<>>,
			Error = actix_web::Error,
			InitError = (),
		> + use<>,
	> {
		let merchant = self.merchant();

		App::new()
			.app_data(handlers::json_config())
			.app_data(web::Data::new(CreateSessionUseCase::new(
				self.store.clone(),
				self.clock(),
				merchant.clone(),
				SessionPolicy::default(),
			)))
			.app_data(web::Data::new(GetSessionUseCase::new(
				self.store.clone(),
				self.clock(),
			)))
			.app_data(web::Data::new(ConfirmPaymentUseCase::new(
				self.store.clone(),
				self.clock(),
				merchant.payment_method.clone(),
			)))
			.app_data(web::Data::new(CancelSessionUseCase::new(
				self.store.clone(),
				self.clock(),
			)))
			.app_data(web::Data::new(GetStatsUseCase::new(self.store.clone())))
			.app_data(web::Data::new(ServerStartedAt::now()))
			.service(handlers::create_session)
			.service(handlers::confirm_payment)
			.service(handlers::session_status)
			.service(handlers::cancel_session)
			.service(handlers::stats)
			.service(handlers::health)
			.default_service(web::to(handlers::not_found))
	}
}

/// Creates a session through the API and returns its id.
macro_rules! create_session {
	($app:expr, $amount:expr) => {{
		let req = actix_web::test::TestRequest::post()
			.uri("/api/payment/create")
			.set_json(serde_json::json!({ "amount": $amount }))
			.to_request();
		let resp = actix_web::test::call_service($app, req).await;
		assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
		let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
		body["data"]["id"].as_str().unwrap().to_string()
	}};
}
