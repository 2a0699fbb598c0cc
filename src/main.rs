use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use weather_stream::io::{JsonlSink, JsonlSource};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "weather-stream")]
#[command(about = "Weather telemetry stream processor", long_about = None)]
struct Cli {
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pass a JSONL feed through the aggregator (stops at the first bad record).
    Run {
        /// Input feed, `-` for stdin.
        #[arg(short = 'i', long)]
        input: String,

        /// Where pass-through records go, `-` for stdout.
        #[arg(short = 'o', long, default_value = "-")]
        output: String,

        /// Optional file for snapshot/reset responses.
        #[arg(long)]
        responses: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.cmd {
        Commands::Run {
            input,
            output,
            responses,
        } => run(&input, &output, responses.as_deref())?,
    }

    Ok(())
}

fn init_logging(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .format_timestamp(None)
        .init();
}

fn run(input: &str, output: &str, responses: Option<&str>) -> Result<()> {
    // 1) Open both ends.
    let source = JsonlSource::open(input)?;
    let mut sink = JsonlSink::create(output)?;
    let mut response_sink = responses.map(JsonlSink::create).transpose()?;

    // 2) Pump records; each one is written before it is routed.
    let mut dispatcher = weather_stream::process_fallible(source);
    let outcome = loop {
        let item = dispatcher.next();

        if let (Some(rs), Some(resp)) = (response_sink.as_mut(), dispatcher.take_response()) {
            rs.write(&resp)?;
        }

        match item {
            Some(Ok(record)) => sink.write(&record)?,
            Some(Err(e)) => break Err(e),
            None => break Ok(()),
        }
    };

    // 3) Whatever was emitted stays emitted, even on failure.
    sink.flush()?;
    if let Some(rs) = response_sink.as_mut() {
        rs.flush()?;
    }

    outcome.with_context(|| {
        format!(
            "stream aborted after {} record(s) from {}",
            dispatcher.emitted(),
            input
        )
    })?;

    log::info!(
        "processed {} record(s), {} station(s) tracked",
        sink.written(),
        dispatcher.state().station_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        let cli = Cli::try_parse_from(["weather-stream", "run", "--input", "feed.jsonl"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn log_level_is_parsed() {
        let cli = Cli::try_parse_from([
            "weather-stream",
            "run",
            "--input",
            "-",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(log::LevelFilter::from(cli.log_level), log::LevelFilter::Debug);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = Cli::try_parse_from([
            "weather-stream",
            "run",
            "--input",
            "-",
            "--log-level",
            "loud",
        ])
        .err()
        .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
