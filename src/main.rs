// cppyc: cppy to Python translator

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as CliParser;
use crossterm::style::Color;
use tracing::Level;

use cppyc::driver::{failure_diagnostics, label, translate_file, RunConfig};
use cppyc::CompileOptions;

/// Translate a cppy program into Python source
#[derive(CliParser, Debug)]
#[command(name = "cppyc", version)]
struct Cli {
    /// Input source file (.cppy)
    input: PathBuf,

    /// Directory for the generated files (defaults to the input's directory)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Spaces per indentation level in the generated Python
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    indent_width: u16,

    /// Do not write the token dump
    #[arg(long)]
    no_tokens: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RunConfig {
        out_dir: cli.out_dir,
        write_tokens: !cli.no_tokens,
        options: CompileOptions::with_indent_width(usize::from(cli.indent_width)),
    };

    let styled = std::io::stderr().is_terminal();
    let warning = label("warning:", Color::Yellow, styled);
    let ok = label("ok:", Color::Green, styled);

    match translate_file(&cli.input, &config) {
        Ok(report) => {
            for diagnostic in &report.diagnostics {
                eprintln!("{} {}", warning, diagnostic);
            }
            if report.wrote_tokens {
                eprintln!(
                    "{} token file generated: '{}'",
                    ok,
                    report.paths.tokens.display()
                );
            }
            eprintln!(
                "{} Python code generated: '{}'",
                ok,
                report.paths.python.display()
            );
            eprintln!("To run it: python {}", report.paths.python.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            for diagnostic in failure_diagnostics(&err) {
                eprintln!("{} {}", warning, diagnostic);
            }
            eprintln!("{} {:#}", label("error:", Color::Red, styled), err);
            ExitCode::FAILURE
        }
    }
}
