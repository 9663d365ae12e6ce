//! Prints the cascading settings of the current deployment.
//!
//! The deployment is read from `BLUE_ENVIRONMENT`, `BLUE_REGION` and
//! `BLUE_CONFIG_TYPE`. Settings are loaded from `<db-dir>/settings.db`.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use cascade::ServerConfig;
use cascade::prelude::*;
use cascade_settings_adapter_redb::{AdapterConfig, SettingsAdapterRedb};

#[derive(Debug, Parser)]
#[command(name = "cascade-basic-server")]
#[command(about = "Resolve and print the settings of the current deployment", version)]
struct Cli {
	/// Output the resolved settings as JSON
	#[arg(long)]
	json: bool,

	/// Directory holding settings.db
	#[arg(long, env = "DB_DIR", default_value = "./data")]
	db_dir: PathBuf,

	/// Give up resolving after this many milliseconds
	#[arg(long, env = "SETTINGS_TIMEOUT_MS")]
	timeout_ms: Option<u64>,
}

fn print_settings(out: &mut impl Write, settings: &[Setting]) -> CsResult<()> {
	for setting in settings {
		writeln!(out, "{} = {}  [{}]", setting.key, setting.value, setting.provenance)?;
		for overridden in setting.overridden() {
			writeln!(out, "    overrides {}  [{}]", overridden.value, overridden.provenance)?;
		}
	}
	Ok(())
}

async fn run(cli: Cli) -> CsResult<()> {
	let store =
		SettingsAdapterRedb::new(cli.db_dir.join("settings.db"), AdapterConfig::default()).await?;

	let mut builder = ServerConfig::builder();
	builder.store(Arc::new(store));
	if let Some(ms) = cli.timeout_ms {
		builder.timeout(Duration::from_millis(ms));
	}
	let provider = builder.build()?;

	let settings = provider.all_settings().await?;
	info!("Resolved {} settings for {}", settings.len(), provider.params());

	let mut out = std::io::stdout().lock();
	if cli.json {
		serde_json::to_writer_pretty(&mut out, &settings).map_err(std::io::Error::from)?;
		writeln!(out)?;
	} else {
		print_settings(&mut out, &settings)?;
	}
	Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	match run(cli).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("FATAL: {}", err);
			ExitCode::FAILURE
		}
	}
}


// vim: ts=4
