use crate::{DomainMonitorJob, ErrorRateReportJob};
use soa_monitor_application::ports::ErrorContext;
use soa_monitor_application::services::ErrorReporter;
use soa_monitor_domain::DomainError;
use std::any::Any;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn job_name(&self) -> String;
    fn error_context(&self) -> ErrorContext;
    fn start_job(self: Arc<Self>) -> JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn job_name(&self) -> String {
                self.job_name()
            }

            fn error_context(&self) -> ErrorContext {
                self.error_context()
            }

            fn start_job(self: Arc<Self>) -> JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(DomainMonitorJob);
impl_spawnable_job!(ErrorRateReportJob);

fn spawn_job<J: SpawnableJob>(
    job: J,
    shutdown: &Option<CancellationToken>,
    reporter: &Option<Arc<ErrorReporter>>,
) -> JoinHandle<()> {
    let job = match shutdown {
        Some(token) => job.with_cancellation(token.clone()),
        None => job,
    };

    let Some(reporter) = reporter.clone() else {
        return Arc::new(job).start_job();
    };

    let name = job.job_name();
    let context = job.error_context();
    let handle = Arc::new(job).start_job();

    // A panicking job is gone for good; make sure it is reported.
    tokio::spawn(async move {
        if let Err(e) = handle.await {
            if e.is_panic() {
                let error = DomainError::JobPanicked {
                    job: name,
                    message: panic_message(e.into_panic()),
                };
                reporter.report(&error, &context);
            }
        }
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

pub struct JobRunner {
    domain_monitors: Vec<DomainMonitorJob>,
    error_rate_report: Option<ErrorRateReportJob>,
    shutdown: Option<CancellationToken>,
    reporter: Option<Arc<ErrorReporter>>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            domain_monitors: Vec::new(),
            error_rate_report: None,
            shutdown: None,
            reporter: None,
        }
    }

    pub fn with_domain_monitor(mut self, job: DomainMonitorJob) -> Self {
        self.domain_monitors.push(job);
        self
    }

    pub fn with_error_rate_report(mut self, job: ErrorRateReportJob) -> Self {
        self.error_rate_report = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Jobs that panic are reported here as [`DomainError::JobPanicked`].
    pub fn with_error_reporter(mut self, reporter: Arc<ErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Spawns every configured job and returns their handles. Each handle
    /// completes once its job has observed cancellation, or after a panic
    /// has been reported.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!(
            domains = self.domain_monitors.len(),
            "Starting background job runner"
        );

        let mut handles = Vec::with_capacity(self.domain_monitors.len() + 1);

        for job in self.domain_monitors {
            handles.push(spawn_job(job, &self.shutdown, &self.reporter));
        }
        if let Some(job) = self.error_rate_report {
            handles.push(spawn_job(job, &self.shutdown, &self.reporter));
        }

        info!("All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
