use std::str::FromStr;
use tracing::Level;

pub fn parse_level(level: &str) -> Level {
    Level::from_str(level).unwrap_or(Level::INFO)
}

pub fn setup_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // json lines are read by tools, keep ANSI color codes out of them.
        .with_ansi(false)
        // events carry their own created_at timestamp.
        .without_time()
        .json()
        .init();
}
