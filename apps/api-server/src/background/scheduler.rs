//! Minute-cadence publish scheduler built on tokio-cron-scheduler.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use postline_core::ports::PostStore;

use super::publisher::publish_due_posts;

/// Every minute at second 0. A due post is promoted at most one period
/// late, so the cadence is a latency bound, not a correctness knob.
pub const EVERY_MINUTE: &str = "0 * * * * *";

/// Scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Enable the publish sweep.
    pub enabled: bool,
    /// Cron expression for the sweep cadence (seconds field included).
    pub publish_cron: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            publish_cron: EVERY_MINUTE.to_string(),
        }
    }
}

impl SchedulerConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var("SCHEDULER_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            publish_cron: std::env::var("SCHEDULER_PUBLISH_CRON")
                .unwrap_or_else(|_| EVERY_MINUTE.to_string()),
        }
    }
}

/// The background task that promotes due `Upcoming` posts to `Published`.
///
/// Owns a handle to the shared post store and nothing else; all post
/// mutations go through the store's atomic operations.
pub struct PublishScheduler {
    inner: JobScheduler,
    config: SchedulerConfig,
}

impl PublishScheduler {
    /// Create the scheduler and register the publish sweep against `store`.
    pub async fn new(
        config: SchedulerConfig,
        store: Arc<dyn PostStore>,
    ) -> Result<Self, JobSchedulerError> {
        let inner = JobScheduler::new().await?;

        // Sweeps never overlap: a tick that fires while the previous sweep
        // is still running is skipped, not queued.
        let running = Arc::new(Mutex::new(()));

        let job = Job::new_async(config.publish_cron.as_str(), move |_uuid, _lock| {
            let store = store.clone();
            let running = running.clone();
            Box::pin(async move {
                let Ok(_guard) = running.try_lock() else {
                    tracing::warn!("Previous publish sweep still running, skipping tick");
                    return;
                };
                publish_due_posts(store.as_ref(), Utc::now()).await;
            })
        })?;

        let id = inner.add(job).await?;
        tracing::info!(schedule = %config.publish_cron, job_id = %id, "Publish sweep registered");

        Ok(Self { inner, config })
    }

    /// Start ticking.
    pub async fn start(&self) -> Result<(), JobSchedulerError> {
        if !self.config.enabled {
            tracing::info!("Publish scheduler disabled");
            return Ok(());
        }

        self.inner.start().await?;
        tracing::info!("Publish scheduler started");
        Ok(())
    }

    /// Stop scheduling future sweeps. An in-flight sweep runs to
    /// completion; per-post mutations are atomic, so nothing is left half
    /// done.
    pub async fn shutdown(&mut self) -> Result<(), JobSchedulerError> {
        self.inner.shutdown().await?;
        tracing::info!("Publish scheduler stopped");
        Ok(())
    }
}
