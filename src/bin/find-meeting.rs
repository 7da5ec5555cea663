use log::{info, LevelFilter};
use meeting_query::{QueryInput, TimeRange, ValidationError};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use thiserror::Error;

#[derive(Error, Debug)]
enum FindMeetingError {
    #[error("Could not read input: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed input: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), FindMeetingError> {
    let level = env::var("MEETING_QUERY_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    setup_logger(level)?;

    let raw = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    let input: QueryInput = serde_json::from_str(&raw)?;
    info!(
        "read {} events and {} requests",
        input.events.len(),
        input.requests.len()
    );

    let results: Vec<Vec<TimeRange>> = if env::var_os("MEETING_QUERY_SKIP_VALIDATION").is_some() {
        meeting_query::query_all(&input.events, &input.requests)
    } else {
        input.run()?
    };

    println!("{}", serde_json::to_string(&results)?);

    Ok(())
}

fn setup_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}
