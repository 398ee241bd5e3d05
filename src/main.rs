use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use kaudit::client::KubeOps;
use kaudit::config::{Config, Format};
use kaudit::constants;
use kaudit::formatter::Formatter;
use kaudit::{runner, schedule};

#[derive(Parser, Debug)]
#[command(name = "kaudit", about = "Probes a fixed battery of Kubernetes resources and reports per-resource access verdicts")]
struct Args {
    /// Namespace the namespaced probes run against
    #[arg(long, short)]
    namespace: String,

    /// Seconds between cycles in continuous mode
    #[arg(long, short, default_value_t = constants::DEFAULT_INTERVAL_SECS)]
    interval: u64,

    /// Run a single cycle and exit instead of auditing continuously
    #[arg(long)]
    once: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "pretty")]
    format: Format,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let config = Config::new(args.namespace, args.interval, args.once, args.format)?;

    let client = Client::try_default()
        .await
        .context("unable to create the kube client")?;
    let ops = KubeOps::new(client);

    if config.once {
        let result = runner::run(&ops, &config.namespace).await;
        println!("{}", Formatter::new(config.format, result));
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let format = config.format;
    schedule::run_loop(
        &ops,
        &config.namespace,
        config.interval,
        |result| println!("{}", Formatter::new(format, result.clone())),
        shutdown_rx,
    )
    .await;

    Ok(())
}
