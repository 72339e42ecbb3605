use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::{ExpressionSolver, PrintSink, Puzzle, SolverConfig, validate_numbers};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the countdown numbers puzzle
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find arithmetic expressions over the given numbers that reach the target, \
             or the nearest reachable values. Without numbers a practice puzzle is dealt."
)]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    pub target: Option<u64>,

    /// Numbers available, each usable as often as it is given
    pub numbers: Vec<u64>,

    /// Print each distinct solution only once
    #[arg(short, long)]
    pub unique: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    /// `None` when a practice puzzle should be dealt
    pub puzzle: Option<Puzzle>,
    pub unique: bool,
    pub log_level: LogLevel,
}

impl CliArgs {
    fn into_config(self) -> Result<CliConfig> {
        let puzzle = match self.target {
            Some(target) if !self.numbers.is_empty() => {
                validate_numbers(&self.numbers).context("Invalid numbers")?;
                Some(Puzzle::new(target, self.numbers))
            }
            _ => None,
        };

        Ok(CliConfig {
            puzzle,
            unique: self.unique,
            log_level: self.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let puzzle = match config.puzzle {
        Some(puzzle) => puzzle,
        None => {
            let puzzle = Puzzle::random(&mut rand::rng());
            println!("{}", puzzle);
            puzzle
        }
    };

    let solver = ExpressionSolver::with_config(SolverConfig {
        unique: config.unique,
        ..SolverConfig::default()
    });

    info!(
        "Searching for expressions using {:?} that equal {}",
        puzzle.numbers, puzzle.target
    );

    let report = solver
        .solve(puzzle.target, &puzzle.numbers, &mut PrintSink)
        .context("Search failed")?;

    if report.solutions() == 0 {
        warn!("No expression reaches {} or its nearest values", puzzle.target);
    } else if !report.is_exact() {
        warn!(
            "No exact solution for {}; closest values are {} away",
            puzzle.target, report.deviation
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["countdown", "812", "75", "50", "2", "3", "8", "7"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, Some(812));
            assert_eq!(args.numbers, vec![75, 50, 2, 3, 8, 7]);
            assert!(!args.unique);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_flags() {
        let args = CliArgs::try_parse_from(["countdown", "-u", "-l", "debug", "10", "5", "5"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.unique);
            assert!(matches!(args.log_level, LogLevel::Debug));
            assert_eq!(args.numbers, vec![5, 5]);
        }
    }

    #[test]
    fn test_non_integer_arguments_rejected() {
        assert!(CliArgs::try_parse_from(["countdown", "10", "five"]).is_err());
        assert!(CliArgs::try_parse_from(["countdown", "ten", "5"]).is_err());
        assert!(CliArgs::try_parse_from(["countdown", "10", "-5"]).is_err());
    }

    #[test]
    fn test_fewer_than_two_arguments_deal_a_puzzle() {
        for argv in [vec!["countdown"], vec!["countdown", "100"]] {
            let config = CliArgs::try_parse_from(argv).map(CliArgs::into_config);
            assert!(matches!(config, Ok(Ok(CliConfig { puzzle: None, .. }))));
        }
    }

    #[test]
    fn test_explicit_puzzle() {
        let config = CliArgs::try_parse_from(["countdown", "6", "3", "2"]).map(CliArgs::into_config);
        assert!(matches!(config, Ok(Ok(CliConfig { puzzle: Some(_), .. }))));
        if let Ok(Ok(config)) = config {
            assert_eq!(config.puzzle, Some(Puzzle::new(6, vec![3, 2])));
        }
    }

    #[test]
    fn test_zero_number_rejected() {
        let config = CliArgs::try_parse_from(["countdown", "6", "3", "0"]).map(CliArgs::into_config);
        assert!(matches!(config, Ok(Err(_))));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
