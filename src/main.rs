use anyhow::{Context, Result};
use spycyber_dashboard::clock::ClockService;
use spycyber_dashboard::config::Config;
use spycyber_dashboard::console::{self, Command, HELP_TEXT};
use spycyber_dashboard::dashboard::DashboardController;
use spycyber_dashboard::metrics::RandSource;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr; stdout carries rendered output)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spycyber_dashboard=info".parse()?),
        )
        .init();

    info!("Starting SpyCyber dashboard");

    let config = Config::from_env().context("Invalid configuration")?;

    let clock = ClockService::system(config.clock_interval).start();
    let mut ticks = clock.subscribe();

    let mut dashboard = DashboardController::new(
        &config,
        clock.latest(),
        Box::new(RandSource::thread()),
    );

    println!("{HELP_TEXT}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line.context("Failed to read from stdin")? {
                    Some(line) => line,
                    None => {
                        info!("Input closed");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }

                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => println!("{}", console::execute(&mut dashboard, command)?),
                    Err(e) => {
                        warn!("Rejected input: {}", e);
                        println!("{}", e);
                    }
                }
            }
            changed = ticks.changed() => {
                if changed.is_err() {
                    warn!("Clock stopped unexpectedly");
                    break;
                }
                let tick = ticks.borrow_and_update().clone();
                dashboard.apply_tick(tick);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    clock.stop().await;
    info!("Dashboard closed");
    Ok(())
}
