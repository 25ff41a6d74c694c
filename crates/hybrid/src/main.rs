use anyhow::Context;
use hybrid_work::{WorkBridge, create_work};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
	// logs go to stderr; stdout carries only the work output
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let mut bridge = WorkBridge::new(create_work()).context("failed to construct work bridge")?;
	bridge.do_work().context("work failed")?;
	info!("done");

	Ok(())
}
