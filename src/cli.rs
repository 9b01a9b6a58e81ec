use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use expression_finder::solver::{validate_limit, validate_operands};
use expression_finder::{
    DEFAULT_LIMIT, ExpressionSolver, MAX_OPERANDS, RenderedExpression, SearchRequest,
};
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

/// Which notation to print for each result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain infix, e.g. (2+3)*4
    Program,
    /// LaTeX, e.g. \left(2 + 3\right) \times 4
    Latex,
    /// Both, separated by a tab
    Both,
}

/// Expression Finder - Combine integers with + - * / to hit a target
#[derive(Parser, Debug)]
#[command(name = "expression-finder")]
#[command(
    about = "Find arithmetic expressions using each given integer exactly once that evaluate to a target"
)]
#[command(version)]
pub struct CliArgs {
    /// Integers to combine (between 1 and 5 of them)
    #[arg(required = true)]
    pub numbers: Vec<u32>,

    /// Target value to match; repeat to search several targets in parallel
    #[arg(short, long, required = true, allow_negative_numbers = true)]
    pub target: Vec<i64>,

    /// Maximum number of expressions to print per target
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Output notation
    #[arg(short, long, value_enum, default_value = "both")]
    pub format: OutputFormat,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<u32>,
    pub targets: Vec<i64>,
    pub limit: usize,
    pub format: OutputFormat,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        validate_operands(&args.numbers, MAX_OPERANDS).context("Invalid numbers")?;
        validate_limit(args.limit).context("Invalid limit")?;

        Ok(CliConfig {
            numbers: args.numbers,
            targets: args.target,
            limit: args.limit,
            format: args.format,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Render one result in the requested notation
pub fn format_result(result: &RenderedExpression, format: OutputFormat) -> String {
    match format {
        OutputFormat::Program => result.program.clone(),
        OutputFormat::Latex => result.latex.clone(),
        OutputFormat::Both => format!("{}\t{}", result.program, result.latex),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::default();
    let requests: Vec<SearchRequest> = config
        .targets
        .iter()
        .map(|&target| SearchRequest::new(config.numbers.clone(), target, config.limit))
        .collect();

    info!(
        "Searching for expressions using {:?} that equal {:?}",
        config.numbers, config.targets
    );

    let show_headers = requests.len() > 1;
    for (request, outcome) in requests.iter().zip(solver.search_many(&requests)) {
        let results =
            outcome.with_context(|| format!("Search for target {} failed", request.target))?;

        if show_headers {
            println!("{}:", request.target);
        }

        if results.is_empty() {
            warn!("No matching expression found for {}", request.target);
            println!("No solution.");
            continue;
        }

        for result in &results {
            println!("{}", format_result(result, config.format));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig> {
        let args = CliArgs::try_parse_from(args)?;
        CliConfig::try_from(args)
    }

    #[test]
    fn test_cli_args_parsing() {
        let config = parse(&["expression-finder", "1", "2", "3", "--target", "6"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.numbers, vec![1, 2, 3]);
            assert_eq!(config.targets, vec![6]);
            assert_eq!(config.limit, DEFAULT_LIMIT);
            assert_eq!(config.format, OutputFormat::Both);
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_repeated_and_negative_targets() {
        let config = parse(&[
            "expression-finder",
            "2",
            "3",
            "-t",
            "-1",
            "-t",
            "5",
            "-n",
            "3",
            "-f",
            "latex",
        ]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.targets, vec![-1, 5]);
            assert_eq!(config.limit, 3);
            assert_eq!(config.format, OutputFormat::Latex);
        }
    }

    #[test]
    fn test_cli_rejects_invalid_input() {
        assert!(parse(&["expression-finder", "1", "2"]).is_err());
        assert!(parse(&["expression-finder", "-t", "1"]).is_err());
        assert!(parse(&["expression-finder", "1", "x", "-t", "1"]).is_err());
        assert!(parse(&["expression-finder", "1", "2", "3", "4", "5", "6", "-t", "1"]).is_err());
        assert!(parse(&["expression-finder", "1", "-t", "1", "-n", "0"]).is_err());
    }

    #[test]
    fn test_format_result() {
        let result = RenderedExpression {
            program: "(2+3)*4".to_string(),
            latex: "\\left(2 + 3\\right) \\times 4".to_string(),
        };
        assert_eq!(format_result(&result, OutputFormat::Program), "(2+3)*4");
        assert_eq!(
            format_result(&result, OutputFormat::Latex),
            "\\left(2 + 3\\right) \\times 4"
        );
        assert_eq!(
            format_result(&result, OutputFormat::Both),
            "(2+3)*4\t\\left(2 + 3\\right) \\times 4"
        );
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
