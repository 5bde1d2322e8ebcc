// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Greenroom conferencing front-door server binary.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod version;

/// Greenroom server - conferencing front-door HTTP server.
#[derive(Parser, Debug)]
#[command(
	name = "greenroom-server",
	about = "Greenroom conferencing front-door server",
	version
)]
struct Args {
	/// Subcommands for greenroom-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Parse CLI arguments
	let args = Args::parse();

	// Handle subcommands that should not start the server
	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = greenroom_server_config::load_config()?;

	// Setup tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
			host = %config.http.host,
			port = config.http.port,
			database = %config.database.url,
			lookup_enabled = config.lookup.enabled,
			version = greenroom_common_version::version_code(),
			"starting greenroom-server"
	);

	// Create database pool and apply schema
	let pool = greenroom_server_db::create_pool(&config.database.url).await?;
	greenroom_server_db::run_migrations(&pool).await?;

	let state = greenroom_server::create_app_state(pool, &config);
	let router = greenroom_server::create_router(state);

	let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
	tracing::info!(addr = %listener.local_addr()?, "listening");
	axum::serve(listener, router).await?;

	Ok(())
}
