use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOGS_DIR: &str = "data/logs";
const LOG_FILE_NAME: &str = "claimer.log";
const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

pub fn init_default_logger() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(LOGS_DIR, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    guard
}
