use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vocabot_config::LogFormat;

pub fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_ansi(atty::is(atty::Stream::Stdout)))
            .init(),
    }
}
