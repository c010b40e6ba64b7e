use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use design_patterns::{Demo, run_demo};
use log::info;

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

/// Which pattern walkthrough to print
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DemoArg {
    Composite,
    AbstractFactory,
    FactoryMethod,
    Builder,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Decorator,
    Showroom,
    All,
}

impl DemoArg {
    pub fn to_demo(self) -> Demo {
        match self {
            DemoArg::Composite => Demo::Composite,
            DemoArg::AbstractFactory => Demo::AbstractFactory,
            DemoArg::FactoryMethod => Demo::FactoryMethod,
            DemoArg::Builder => Demo::Builder,
            DemoArg::Prototype => Demo::Prototype,
            DemoArg::Singleton => Demo::Singleton,
            DemoArg::Adapter => Demo::Adapter,
            DemoArg::Bridge => Demo::Bridge,
            DemoArg::Decorator => Demo::Decorator,
            DemoArg::Showroom => Demo::Showroom,
            DemoArg::All => Demo::All,
        }
    }
}

/// Design patterns - Run classic design pattern walkthroughs
#[derive(Parser, Debug)]
#[command(name = "design-patterns")]
#[command(about = "Print the console walkthrough of a classic design pattern")]
#[command(version)]
pub struct CliArgs {
    /// Pattern to demonstrate
    #[arg(value_enum, default_value = "all")]
    pub demo: DemoArg,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub demo: Demo,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliConfig::from(CliArgs::parse())
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        CliConfig {
            demo: args.demo.to_demo(),
            log_level: args.log_level,
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    info!("Running demo '{}'", config.demo.title());

    let lines = run_demo(config.demo)
        .with_context(|| format!("{} demo failed", config.demo.title()))?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["design-patterns", "composite", "-l", "debug"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.demo, DemoArg::Composite));
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::try_parse_from(["design-patterns"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = CliConfig::from(args);
            assert_eq!(config.demo, Demo::All);
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_kebab_case_demo() {
        let args = CliArgs::try_parse_from(["design-patterns", "abstract-factory"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.demo.to_demo(), Demo::AbstractFactory);
        }
    }

    #[test]
    fn test_cli_rejects_unknown_demo() {
        let args = CliArgs::try_parse_from(["design-patterns", "visitor"]);
        assert!(args.is_err());
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
