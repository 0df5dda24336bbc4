//! Background sweep task for reclaiming dead records
//!
//! Expiry is enforced lazily on access, so the sweep exists purely to
//! bound memory: without it, consumed and expired records would sit
//! in the store until the next access to the same phone number.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::errors::OtpResult;
use crate::services::otp::OtpStore;

/// Configuration for the sweep task
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep cycle (in seconds)
    pub interval_seconds: u64,
    /// Whether the background task runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

/// Periodic sweeper over an [`OtpStore`]
pub struct OtpSweeper<R: OtpStore + 'static> {
    store: Arc<R>,
    config: SweeperConfig,
}

impl<R: OtpStore> OtpSweeper<R> {
    /// Create a new sweeper over the given store
    pub fn new(store: Arc<R>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep cycle
    ///
    /// Idempotent and safe to run concurrently with issue/verify; it
    /// only ever removes records that are already dead.
    pub async fn run_sweep(&self) -> OtpResult<usize> {
        let removed = self.store.sweep().await?;
        let resident = self.store.record_count().await;

        if removed > 0 {
            info!(removed, resident, "Sweep reclaimed dead OTP records");
        } else {
            debug!(resident, "Sweep found nothing to reclaim");
        }

        Ok(removed)
    }

    /// Start the sweeper as a background task
    ///
    /// Returns a handle whose [`SweeperHandle::stop`] aborts the
    /// task. Stopping the sweeper only affects memory reclamation,
    /// never correctness, so it is safe to call at any point during
    /// shutdown.
    pub fn start_background_task(self: Arc<Self>) -> SweeperHandle {
        if !self.config.enabled {
            warn!("OTP sweeper is disabled; relying on lazy expiry only");
            return SweeperHandle { handle: None };
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        let handle = tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "OTP sweeper started"
            );

            let mut interval_timer = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so a fresh
            // process does not sweep an empty store.
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_sweep().await {
                    error!(error = %e, "OTP sweep cycle failed");
                }
            }
        });

        SweeperHandle {
            handle: Some(handle),
        }
    }
}

/// Handle to a running sweeper task
pub struct SweeperHandle {
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl SweeperHandle {
    /// Stop the background task
    pub fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("OTP sweeper stopped");
        }
    }

    /// Whether a background task was actually started
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map_or(false, |h| !h.is_finished())
    }
}
