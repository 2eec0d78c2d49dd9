use clap::{CommandFactory, Parser};
use graphql_frontend::ast::{parse, ASTContext};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(Parser, Debug)]
#[command(name = "graphql-cli", version, about = "Lexes and parses GraphQL documents.")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[arg(help = "Enable verbose output.", long, short = 'v')]
    verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Parse a GraphQL document and report the first lexical or syntax error.
    Parse {
        #[arg(help = "Path to a GraphQL document, or `-` to read from standard input.")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(&cli);

    match cli.cmd {
        Some(Command::Parse { file }) => run_parse(&file),
        None => {
            // Help goes to stderr, since nothing was run
            eprintln!("{}", Cli::command().render_help());
            ExitCode::FAILURE
        }
    }
}

fn run_parse(file: &Path) -> ExitCode {
    let source = match read_source(file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {err}", file.display());
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Read {} bytes from {}.", source.len(), file.display());

    let ctx = ASTContext::new();
    match parse(&ctx, &source) {
        Ok(document) => {
            log::debug!("Parsed {} definitions.", document.definitions.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: &Path) -> std::io::Result<String> {
    if file.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(file)
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        let env_val = std::env::var("LOG_LEVEL").map(|s| s.trim().to_string());
        match env_val.as_deref() {
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("INFO" | "info") => tracing::Level::INFO,
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok("WARN" | "warn") => tracing::Level::WARN,
            Ok("ERROR" | "error") => tracing::Level::ERROR,
            Ok(other) => {
                log_level_warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{other}`"
                ));
                DEFAULT_LOG_LEVEL
            }
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arguments() {
        let cli = Cli::try_parse_from(["graphql-cli", "-v", "parse", "query.graphql"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.cmd,
            Some(Command::Parse { ref file }) if file.to_str() == Some("query.graphql")
        ));

        let cli = Cli::try_parse_from(["graphql-cli"]).unwrap();
        assert!(cli.cmd.is_none());

        assert!(Cli::try_parse_from(["graphql-cli", "format", "query.graphql"]).is_err());
        assert!(Cli::try_parse_from(["graphql-cli", "parse"]).is_err());
    }

    #[test]
    fn missing_file() {
        let file = PathBuf::from("does/not/exist.graphql");
        assert!(read_source(&file).is_err());
    }

    #[test]
    fn verifies_cli() {
        Cli::command().debug_assert();
    }
}
