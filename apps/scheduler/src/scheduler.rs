//! Cron driver for the ranking pipeline.
//!
//! Scheduled firings and manual triggers share one [`SingleFlightGuard`];
//! whichever arrives while a run is in flight is skipped.

use std::sync::Arc;

use bankrank_core::{PipelineOutcome, RankingPipeline};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::guard::SingleFlightGuard;
use crate::notify::{Notification, NotificationSink};
use crate::schedule::CronSchedule;

/// What a single trigger amounted to.
#[derive(Debug)]
pub enum TriggerOutcome {
    Completed(PipelineOutcome),
    Failed(bankrank_core::Error),
    /// Another run was in flight; nothing was done.
    Skipped,
}

impl TriggerOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, TriggerOutcome::Skipped)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerStatus {
    pub is_running: bool,
    pub schedule: String,
    pub timezone: String,
    pub next_run: Option<DateTime<Utc>>,
    pub source_url: String,
}

pub struct ScrapeScheduler {
    pipeline: Arc<RankingPipeline>,
    schedule: CronSchedule,
    guard: SingleFlightGuard,
    notifier: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
}

impl ScrapeScheduler {
    pub fn new(
        pipeline: Arc<RankingPipeline>,
        schedule: CronSchedule,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            pipeline,
            schedule,
            guard: SingleFlightGuard::new(),
            notifier,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn schedule(&self) -> &CronSchedule {
        &self.schedule
    }

    pub fn guard(&self) -> &SingleFlightGuard {
        &self.guard
    }

    /// Starts firing on schedule until the returned task is aborted.
    ///
    /// Each firing runs in its own task so a slow run never delays the
    /// next firing; the guard decides whether it does anything.
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("Scheduler started with cron: {}", self.schedule);

            loop {
                let now = self.clock.now();
                let Some(next) = self.schedule.next_after(now) else {
                    warn!("Schedule {} has no upcoming firings, stopping", self.schedule);
                    return;
                };
                info!("Next scheduled scrape at {}", next);

                let wait = (next - now).to_std().unwrap_or_default();
                tokio::time::sleep(wait).await;

                let this = Arc::clone(&self);
                tokio::spawn(async move {
                    this.run_scheduled().await;
                });
            }
        })
    }

    /// One scheduled firing. The outcome goes to the notification sink.
    pub async fn run_scheduled(&self) -> TriggerOutcome {
        info!("Running scheduled bank data scrape...");
        let outcome = self.run_guarded().await;

        match &outcome {
            TriggerOutcome::Completed(run) => {
                self.notifier.notify(Notification::success(run.bank_count()));
            }
            TriggerOutcome::Failed(e) => {
                error!("Scheduled scrape failed: {}", e);
                self.notifier.notify(Notification::failure(e));
            }
            TriggerOutcome::Skipped => {}
        }
        outcome
    }

    /// Manual trigger, outside the schedule. Not reported to the sink.
    pub async fn run_now(&self) -> TriggerOutcome {
        info!("Running manual bank data scrape...");
        let outcome = self.run_guarded().await;

        if let TriggerOutcome::Failed(e) = &outcome {
            error!("Manual scrape failed: {}", e);
        }
        outcome
    }

    pub fn status(&self) -> SchedulerStatus {
        SchedulerStatus {
            is_running: self.guard.is_running(),
            schedule: self.schedule.expression().to_string(),
            timezone: self.schedule.timezone().name().to_string(),
            next_run: self.schedule.next_after(self.clock.now()),
            source_url: self.pipeline.source_url().to_string(),
        }
    }

    async fn run_guarded(&self) -> TriggerOutcome {
        let Some(permit) = self.guard.try_acquire() else {
            warn!("Previous scrape still running, skipping this execution");
            return TriggerOutcome::Skipped;
        };

        let outcome = match self.pipeline.run().await {
            Ok(run) => TriggerOutcome::Completed(run),
            Err(e) => TriggerOutcome::Failed(e),
        };
        permit.release();
        outcome
    }
}
