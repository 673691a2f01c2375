use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use squareword::WordList;
use squareword::core::config;
use std::fs::File;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

#[derive(Parser)]
#[command(name = "squareword", about = "Chain words around a square until every letter is used")]
struct Args {
    /// Board letters as top,left,right,bottom (e.g. GIA,WHO,LSE,RVT)
    #[arg(short, long)]
    board: Option<String>,

    /// Word list file, one word per line
    #[arg(short, long)]
    lexicon: Option<String>,

    /// Log level for squareword.log
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to squareword.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("squareword.log") {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    let file_config = config::load_config()?;
    let cli = config::Overrides {
        board: args.board,
        lexicon: args.lexicon,
    };
    let resolved = config::resolve(&file_config, &cli, &config::Overrides::from_env())?;
    log::info!("Squareword starting up with board {}", resolved.board);

    let lexicon = match &resolved.lexicon_path {
        Some(path) => WordList::load(path)?,
        None => WordList::builtin(),
    };

    squareword::tui::run(resolved, Arc::new(lexicon))?;
    Ok(())
}
