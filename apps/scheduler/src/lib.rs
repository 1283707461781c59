//! BankRank scheduler - runs the ranking pipeline on a cron schedule and on demand.

pub mod clock;
pub mod config;
pub mod guard;
pub mod main_lib;
pub mod notify;
pub mod schedule;
pub mod scheduler;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use guard::{FlightPermit, SingleFlightGuard};
pub use main_lib::{build_scheduler, init_tracing};
pub use notify::{LogNotificationSink, Notification, NotificationSink};
pub use schedule::{CronSchedule, ScheduleError};
pub use scheduler::{SchedulerStatus, ScrapeScheduler, TriggerOutcome};
