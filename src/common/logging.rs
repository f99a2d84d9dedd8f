use crate::common::config::LoggingConfig;
use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

struct CustomTimeFormat;

impl FormatTime for CustomTimeFormat {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Installs the process-wide subscriber: a rolling main log plus a
/// dedicated log for EA state transitions, with an optional console
/// layer. Call once at startup.
pub struct LoggingManager {
    config: LoggingConfig,
}

impl LoggingManager {
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    pub fn init(&self) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        let log_dir = current_dir.join(&self.config.log_dir);

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        let main_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "main.log");
        let state_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "state.log");

        // state transitions go to their own file, everything else to main
        let main_filter = EnvFilter::new("info").add_directive("state=off".parse().unwrap());

        let state_filter = EnvFilter::new("off").add_directive("state=info".parse().unwrap());

        let main_layer = fmt::layer()
            .with_writer(main_appender)
            .with_timer(CustomTimeFormat)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_filter(main_filter);

        let state_layer = fmt::layer()
            .with_writer(state_appender)
            .with_timer(CustomTimeFormat)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_filter(state_filter);

        let console_layer = if self.config.enable_console {
            Some(
                fmt::layer()
                    .with_timer(CustomTimeFormat)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_filter(EnvFilter::new("info")),
            )
        } else {
            None
        };

        let registry = tracing_subscriber::registry()
            .with(main_layer)
            .with(state_layer);

        if let Some(console) = console_layer {
            registry.with(console).init();
        } else {
            registry.init();
        }

        info!("Logging initialised");
        info!("Log directory: {}", log_dir.display());

        Ok(())
    }
}

/// Routes a record to the EA state-transition log.
#[macro_export]
macro_rules! state_log {
    ($level:ident, $($arg:tt)*) => {
        tracing::$level!(target: "state", $($arg)*);
    };
}

/// Routes a record to the main EA log.
#[macro_export]
macro_rules! ea_log {
    ($level:ident, $($arg:tt)*) => {
        tracing::$level!(target: "ea", $($arg)*);
    };
}
