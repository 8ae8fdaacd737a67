use std::{fs, io, path::Path};

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

static INIT: OnceCell<()> = OnceCell::new();
static GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();

/// Console output always; daily-rolling file output when a logs directory is
/// configured. Safe to call more than once.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    INIT.get_or_try_init::<_, anyhow::Error>(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_ansi(true);

        let file_layer = match &config.logs_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                let file_appender = tracing_appender::rolling::daily(Path::new(dir), "formtrap.log");
                let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
                let _ = GUARD.set(guard);
                Some(fmt::layer().with_writer(file_writer).with_target(true).with_ansi(false))
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        Ok(())
    })?;
    Ok(())
}
