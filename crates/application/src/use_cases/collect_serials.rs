use crate::ports::{ErrorContext, SoaQuery};
use crate::services::ErrorReporter;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use soa_monitor_domain::{DomainError, PollResult, ServerAddr, Zone};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub server: ServerAddr,
    pub error: DomainError,
}

/// Serials gathered in one fan-out, with the servers that failed.
#[derive(Debug, Clone, Default)]
pub struct SerialCollection {
    pub poll: PollResult,
    pub failures: Vec<FetchFailure>,
}

/// Use case: query every server concurrently and wait for all of them.
///
/// A failing server is left out of the result and reported; it never aborts
/// the rest of the batch. Servers listed twice are queried twice.
pub struct CollectSerialsUseCase {
    soa: Arc<dyn SoaQuery>,
    reporter: Arc<ErrorReporter>,
}

impl CollectSerialsUseCase {
    pub fn new(soa: Arc<dyn SoaQuery>, reporter: Arc<ErrorReporter>) -> Self {
        Self { soa, reporter }
    }

    pub async fn execute(&self, zone: &Zone, servers: &[ServerAddr]) -> SerialCollection {
        let poll = Arc::new(Mutex::new(PollResult::new()));
        let mut fetches = FuturesUnordered::new();

        for server in servers {
            let soa = Arc::clone(&self.soa);
            let poll = Arc::clone(&poll);
            let zone = zone.clone();
            let task_server = server.clone();

            let handle = tokio::spawn(async move {
                let serial = soa.query_serial(&zone, &task_server).await?;
                debug!(domain = %zone, server = %task_server, serial = serial.value(), "SOA serial received");
                poll.lock().await.record(task_server, serial);
                Ok::<(), DomainError>(())
            });

            let server = server.clone();
            fetches.push(async move { (server, handle.await) });
        }

        let mut failures = Vec::new();
        while let Some((server, joined)) = fetches.next().await {
            let error = match joined {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(e) => DomainError::TransportError {
                    server: server.to_string(),
                    message: format!("fetch task failed: {}", e),
                },
            };

            self.reporter
                .report(&error, &ErrorContext::server(zone, &server));
            failures.push(FetchFailure { server, error });
        }

        let poll = match Arc::try_unwrap(poll) {
            Ok(poll) => poll.into_inner(),
            Err(shared) => shared.lock().await.clone(),
        };

        SerialCollection { poll, failures }
    }
}
