use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::RunnerError;

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_LEVEL_VAR: &str = "SIR_LOG";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
// Use an ISO 8601 timestamp format and color coded level tag
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Installs the global logger. Log lines go to stderr since stdout may be
/// carrying CSV output.
pub fn init_logging() -> Result<(), RunnerError> {
    let level = parse_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| RunnerError::LoggingError(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| RunnerError::LoggingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use log::LevelFilter;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }
}
