use clap::builder::BoolishValueParser;
use clap::Parser;
use soa_monitor_application::ports::MetricsSink;
use soa_monitor_domain::CliOverrides;
use soa_monitor_jobs::{DomainMonitorJob, ErrorRateReportJob, JobRunner};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;

const SENTRY_FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Parser)]
#[command(name = "soa-monitor")]
#[command(version)]
#[command(about = "Watches SOA serials on primary and secondary DNS servers and reports replication lag")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zones to monitor (comma-separated)
    #[arg(long, env = "DOMAIN_NAMES", value_delimiter = ',')]
    domains: Option<Vec<String>>,

    /// Primary servers, in priority order (comma-separated)
    #[arg(long, env = "PRIMARY_SERVERS", value_delimiter = ',')]
    primary_servers: Option<Vec<String>>,

    /// Secondary servers (comma-separated)
    #[arg(long, env = "SECONDARY_SERVERS", value_delimiter = ',')]
    secondary_servers: Option<Vec<String>>,

    /// Seconds between poll cycles
    #[arg(long, env = "POLL_INTERVAL")]
    poll_interval: Option<u64>,

    /// Log every lag sample
    #[arg(long, env = "DEBUG", value_parser = BoolishValueParser::new())]
    debug: Option<bool>,

    #[arg(long, env = "LIBRATO_USER")]
    librato_user: Option<String>,

    #[arg(long, env = "LIBRATO_TOKEN", hide_env_values = true)]
    librato_token: Option<String>,

    /// Source name for submitted metrics
    #[arg(long, env = "LIBRATO_SOURCE")]
    librato_source: Option<String>,

    /// Sentry DSN; error tracking is off when unset
    #[arg(long, env = "SENTRY_DSN", hide_env_values = true)]
    sentry_dsn: Option<String>,

    /// Sentry environment tag
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    sentry_environment: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            domains: self.domains.as_deref().map(clean_list),
            primary_servers: self.primary_servers.as_deref().map(clean_list),
            secondary_servers: self.secondary_servers.as_deref().map(clean_list),
            poll_interval: self.poll_interval,
            debug: self.debug,
            librato_user: non_empty(&self.librato_user),
            librato_token: non_empty(&self.librato_token),
            librato_source: non_empty(&self.librato_source),
            sentry_dsn: non_empty(&self.sentry_dsn),
            sentry_environment: non_empty(&self.sentry_environment),
            log_level: non_empty(&self.log_level),
        }
    }
}

fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config)?;

    info!("Starting SOA monitor v{}", env!("CARGO_PKG_VERSION"));

    let targets = config.monitor_targets()?;
    let interval = Duration::from_secs(config.monitor.poll_interval);

    // Dependency Injection
    let sinks = di::Sinks::new(&config)?;
    let use_cases = di::UseCases::new(&config, &sinks);

    let shutdown = CancellationToken::new();
    let mut runner = JobRunner::new()
        .with_shutdown_token(shutdown.clone())
        .with_error_reporter(use_cases.reporter.clone());

    for target in targets {
        runner = runner.with_domain_monitor(
            DomainMonitorJob::new(use_cases.poll_domain.clone(), target)
                .with_interval(interval)
                .with_remember_max_serial(config.monitor.remember_max_serial),
        );
    }

    runner = runner.with_error_rate_report(
        ErrorRateReportJob::new(use_cases.error_counter.clone(), use_cases.publisher.clone())
            .with_interval(interval),
    );

    let handles = runner.start().await;

    bootstrap::shutdown_signal().await;
    info!("Shutting down");
    shutdown.cancel();

    for handle in handles {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    if let Some(metrics) = &sinks.metrics {
        metrics.flush().await;
    }
    if let Some(sentry) = sinks.sentry {
        sentry.close(SENTRY_FLUSH_TIMEOUT).await;
    }

    info!("Shutdown complete");
    Ok(())
}
