//! gohex - Create static file imports for Go
//!
//! Renders a file (or standard input) as a Go source file holding a byte
//! slice, the way `xxd -i` does for C.

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use gohex_core::config::{DEFAULT_COLUMNS, DEFAULT_INDENT, DEFAULT_PACKAGE, DEFAULT_VARIABLE};
use gohex_core::{EmbedConfig, Embedder};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Create static file imports for Go
#[derive(Parser, Debug)]
#[command(name = "gohex")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
#[command(override_usage = "gohex [flags] [infile [outfile]]")]
struct Cli {
    /// Input file (default: standard input)
    input: Option<PathBuf>,

    /// Output file, created or truncated (default: standard output)
    output: Option<PathBuf>,

    /// Number of columns to format per line
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Number of tabs to indent the byte slice
    #[arg(short, long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Name for Go package, or empty for none
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// Output byte slice without declarations
    #[arg(short, long)]
    strip: bool,

    /// Name for Go variable of the byte slice
    #[arg(short = 'v', long = "var", default_value = DEFAULT_VARIABLE)]
    variable: String,

    /// Verbosity level (--verbose, --verbose --verbose, ...)
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,

    /// Print this summary
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    /// Resolves the formatting options given on the command line
    fn embed_config(&self) -> EmbedConfig {
        EmbedConfig::new()
            .columns(self.columns)
            .indent(self.indent)
            .variable(self.variable.as_str())
            .package(self.package.as_str())
            .strip(self.strip)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the generated source
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    execute(&cli)
}

/// Handle `--help`, run the conversion and map the outcome to an exit status
fn execute(cli: &Cli) -> ExitCode {
    if cli.help {
        eprint!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Format an error with its cause chain for stderr
fn error_message(err: &anyhow::Error) -> String {
    format!("gohex: {:#}", err)
}

/// Validate options, resolve the streams and render the document
fn run(cli: &Cli) -> Result<()> {
    // Reject bad options before touching any file
    let embedder = Embedder::new(cli.embed_config())?;
    let config = embedder.config();
    debug!(
        "Columns: {}, indent: {}, package: {:?}, strip: {}",
        config.columns, config.indent, config.package, config.strip
    );

    let reader = open_input(cli.input.as_deref())?;
    let writer = open_output(cli.output.as_deref())?;

    info!(
        "Embedding {} into {}",
        display_name(cli.input.as_deref(), "<stdin>"),
        display_name(cli.output.as_deref(), "<stdout>")
    );

    match embedder.embed(reader, writer) {
        Ok(stats) => {
            debug!("Wrote {} lines for {} bytes", stats.lines, stats.bytes);
            Ok(())
        }
        Err(e) => {
            if let Some(path) = &cli.output {
                warn!("Partial output left in {}", path.display());
            }
            Err(e).with_context(|| {
                format!(
                    "failed to embed {}",
                    display_name(cli.input.as_deref(), "<stdin>")
                )
            })
        }
    }
}

/// Open the input file, or standard input when none is given
fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file: {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Create (or truncate) the output file, or use standard output
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn display_name(path: Option<&Path>, fallback: &str) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gohex").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.embed_config(), EmbedConfig::default());
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.help);
    }

    #[test]
    fn test_flags() {
        let cli = parse(&[
            "-c", "16", "-i", "2", "-p", "", "-s", "-v", "3file.txt", "in.bin", "out.go",
        ]);
        let config = cli.embed_config();

        assert_eq!(config.columns, 16);
        assert_eq!(config.indent, 2);
        assert_eq!(config.package, "");
        assert!(config.strip);
        assert_eq!(config.variable, "3file.txt");
        assert_eq!(cli.input, Some(PathBuf::from("in.bin")));
        assert_eq!(cli.output, Some(PathBuf::from("out.go")));
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&["--columns", "4", "--var", "logo", "--package", "assets"]);
        let config = cli.embed_config();

        assert_eq!(config.columns, 4);
        assert_eq!(config.variable, "logo");
        assert_eq!(config.package, "assets");
    }

    fn is_failure(code: ExitCode) -> bool {
        format!("{:?}", code) == format!("{:?}", ExitCode::FAILURE)
    }

    #[test]
    fn test_help_flag() {
        assert!(parse(&["-h"]).help);
        assert!(parse(&["--help"]).help);
    }

    #[test]
    fn test_help_exits_with_failure() {
        assert!(is_failure(execute(&parse(&["-h"]))));
    }

    #[test]
    fn test_execute_missing_input_fails() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.bin");
        let output = temp_dir.path().join("out.go");

        let cli = parse(&[input.to_str().unwrap(), output.to_str().unwrap()]);
        assert!(is_failure(execute(&cli)));
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.bin");
        let output = temp_dir.path().join("out.go");
        fs::write(&input, [0xde, 0xad]).unwrap();

        let cli = parse(&["-s", input.to_str().unwrap(), output.to_str().unwrap()]);
        assert!(!is_failure(execute(&cli)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "\t0xde, 0xad,\n");
    }

    #[test]
    fn test_error_message() {
        let err = anyhow::anyhow!("no such file").context("failed to open input file: in.bin");
        assert_eq!(
            error_message(&err),
            "gohex: failed to open input file: in.bin: no such file"
        );
    }

    #[test]
    fn test_too_many_arguments() {
        assert!(Cli::try_parse_from(["gohex", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_run_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("hello.txt");
        let output = temp_dir.path().join("hello.go");
        fs::write(&input, "Hello, hexadecimal world!").unwrap();

        let cli = parse(&[input.to_str().unwrap(), output.to_str().unwrap()]);
        run(&cli).unwrap();

        let expected = concat!(
            "package main\n",
            "\n",
            "var gohex = []byte{\n",
            "\t0x48, 0x65, 0x6c, 0x6c, 0x6f, 0x2c, 0x20, 0x68, 0x65, 0x78,\n",
            "\t0x61, 0x64, 0x65, 0x63, 0x69, 0x6d, 0x61, 0x6c, 0x20, 0x77,\n",
            "\t0x6f, 0x72, 0x6c, 0x64, 0x21,\n",
            "}\n",
        );
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn test_run_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.bin");
        let output = temp_dir.path().join("out.go");

        let cli = parse(&[input.to_str().unwrap(), output.to_str().unwrap()]);
        let err = run(&cli).unwrap_err();

        assert!(err.to_string().contains("failed to open input file"));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_rejects_config_before_io() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.bin");
        let output = temp_dir.path().join("out.go");
        fs::write(&input, [0u8; 4]).unwrap();

        let cli = parse(&["-c", "0", input.to_str().unwrap(), output.to_str().unwrap()]);
        let err = run(&cli).unwrap_err();

        assert_eq!(err.to_string(), "invalid number of columns: 0 (min. 1)");
        assert!(!output.exists());
    }

    #[test]
    fn test_run_uncreatable_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.bin");
        let output = temp_dir.path().join("no-such-dir").join("out.go");
        fs::write(&input, [0u8; 4]).unwrap();

        let cli = parse(&[input.to_str().unwrap(), output.to_str().unwrap()]);
        let err = run(&cli).unwrap_err();

        assert!(err.to_string().contains("failed to create output file"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(None, "<stdin>"), "<stdin>");
        assert_eq!(display_name(Some(Path::new("a.bin")), "<stdin>"), "a.bin");
    }
}
