use std::path::PathBuf;
use std::process::ExitCode;

use bridgegen::{BridgeGenConfig, generate_files};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Parser)]
#[command(name = "bridgegen", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
	/// Header declaring the abstract interface
	pub header: PathBuf,

	/// Config file (defaults to ./bridgegen.toml when present)
	#[arg(short, long)]
	pub config: Option<PathBuf>,

	/// Appended to the interface name to form the bridge name
	#[arg(short, long)]
	pub suffix: Option<String>,

	/// Prepended to the bridge name to form the factory function name
	#[arg(long)]
	pub factory_prefix: Option<String>,

	/// Output directory (defaults to the header's directory)
	#[arg(short, long)]
	pub out_dir: Option<PathBuf>,
}

impl App {
	fn config(&self) -> bridgegen::Result<BridgeGenConfig> {
		let mut config = BridgeGenConfig::load(self.config.as_deref())?;
		if let Some(suffix) = &self.suffix {
			config.suffix = suffix.clone();
		}
		if let Some(prefix) = &self.factory_prefix {
			config.factory_prefix = prefix.clone();
		}
		if let Some(dir) = &self.out_dir {
			config.output_dir = Some(dir.clone());
		}
		Ok(config)
	}

	fn run(&self) -> bridgegen::Result<()> {
		let config = self.config()?;
		let files = generate_files(&self.header, &config)?;
		println!(
			"[BridgeGen] Generated {}.h and {}.cpp",
			files.bridge_name, files.bridge_name
		);
		Ok(())
	}
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	match App::parse().run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("[BridgeGen] {e}");
			ExitCode::FAILURE
		}
	}
}
