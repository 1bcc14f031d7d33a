use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;

use crate::adapters::web::handlers;
use crate::adapters::web::health_handler::ServerStartedAt;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::money::format_rupiah;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::persistence::in_memory_session_store::InMemorySessionStore;
use crate::infrastructure::workers::session_expiry_worker::session_expiry_worker;
use crate::use_cases::cancel_session::CancelSessionUseCase;
use crate::use_cases::confirm_payment::ConfirmPaymentUseCase;
use crate::use_cases::create_session::CreateSessionUseCase;
use crate::use_cases::expire_sessions::ExpireSessionsUseCase;
use crate::use_cases::get_session::GetSessionUseCase;
use crate::use_cases::get_stats::GetStatsUseCase;

pub mod adapters {
	pub mod web {
		pub mod cancel_session_handler;
		pub mod confirm_payment_handler;
		pub mod create_session_handler;
		pub mod errors;
		pub mod handlers;
		pub mod health_handler;
		pub mod schema;
		pub mod session_status_handler;
		pub mod stats_handler;
	}
}

pub mod domain {
	pub mod clock;
	pub mod error;
	pub mod ledger;
	pub mod merchant;
	pub mod money;
	pub mod qris;
	pub mod repository;
	pub mod session;
	pub mod stats;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod persistence {
		pub mod in_memory_session_store;
	}
	pub mod workers {
		pub mod session_expiry_worker;
	}
}

pub mod use_cases {
	pub mod cancel_session;
	pub mod confirm_payment;
	pub mod create_session;
	pub mod dto;
	pub mod expire_sessions;
	pub mod get_session;
	pub mod get_stats;
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.try_init()
		.ok();

	let merchant = Arc::new(
		config
			.merchant_profile()
			.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?,
	);
	let policy = config.session_policy();
	let clock: Arc<dyn Clock> = Arc::new(SystemClock);
	let store = InMemorySessionStore::new();

	let create_session_use_case = CreateSessionUseCase::new(
		store.clone(),
		clock.clone(),
		merchant.clone(),
		policy,
	);
	let get_session_use_case = GetSessionUseCase::new(store.clone(), clock.clone());
	let confirm_payment_use_case = ConfirmPaymentUseCase::new(
		store.clone(),
		clock.clone(),
		merchant.payment_method.clone(),
	);
	let cancel_session_use_case =
		CancelSessionUseCase::new(store.clone(), clock.clone());
	let get_stats_use_case = GetStatsUseCase::new(store.clone());
	let expire_sessions_use_case =
		ExpireSessionsUseCase::new(store.clone(), clock.clone());

	info!(
		"Starting session expiry worker (every {}s)...",
		config.sweep_interval().as_secs()
	);
	tokio::spawn(session_expiry_worker(
		expire_sessions_use_case,
		config.sweep_interval(),
	));

	let started_at = ServerStartedAt::now();
	let bind_address = (config.server_host.clone(), config.server_port);

	info!(
		"Starting QRIS payment server for {} ({}) on {}:{}...",
		merchant.name, merchant.location, bind_address.0, bind_address.1
	);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(handlers::json_config())
			.app_data(web::Data::new(create_session_use_case.clone()))
			.app_data(web::Data::new(get_session_use_case.clone()))
			.app_data(web::Data::new(confirm_payment_use_case.clone()))
			.app_data(web::Data::new(cancel_session_use_case.clone()))
			.app_data(web::Data::new(get_stats_use_case.clone()))
			.app_data(web::Data::new(started_at))
			.service(handlers::create_session)
			.service(handlers::confirm_payment)
			.service(handlers::session_status)
			.service(handlers::cancel_session)
			.service(handlers::stats)
			.service(handlers::health)
			.default_service(web::to(handlers::not_found))
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(bind_address)?
	.run()
	.await?;

	let final_stats = GetStatsUseCase::new(store).execute();
	info!("Shutting down. Final stats: {final_stats:?}");
	info!(
		"Total revenue: {}",
		format_rupiah(final_stats.counters.total_amount)
	);

	Ok(())
}
