//! File-level glue around [`crate::compile`]
//!
//! Checks the input extension, derives output names, and writes the two
//! artifacts. Output is only written after the whole translation has
//! succeeded, so a syntax error leaves no files behind.

use crate::parser::lexer::LexError;
use crate::{compile, CompileError, CompileOptions};
use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Extension every cppy source file must carry
pub const SOURCE_EXTENSION: &str = "cppy";

/// Suffix appended to the input stem for the token dump
pub const TOKENS_SUFFIX: &str = "_tokens.txt";

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("input file must have a .{} extension: {}", SOURCE_EXTENSION, .0.display())]
    WrongExtension(PathBuf),
}

/// Where the artifacts for one input go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub tokens: PathBuf,
    pub python: PathBuf,
}

impl OutputPaths {
    /// `dir/prog.cppy` → `dir/prog_tokens.txt` and `dir/prog.py`.
    ///
    /// With `out_dir`, both land there instead of next to the input.
    pub fn for_input(input: &Path, out_dir: Option<&Path>) -> Result<Self, DriverError> {
        let has_extension = input
            .extension()
            .is_some_and(|ext| ext == SOURCE_EXTENSION);
        let stem = match input.file_stem() {
            Some(stem) if has_extension => stem.to_string_lossy().into_owned(),
            _ => return Err(DriverError::WrongExtension(input.to_path_buf())),
        };

        let dir = match out_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };

        Ok(Self {
            tokens: dir.join(format!("{}{}", stem, TOKENS_SUFFIX)),
            python: dir.join(format!("{}.py", stem)),
        })
    }
}

/// What a successful run produced
#[derive(Debug)]
pub struct Report {
    pub paths: OutputPaths,
    /// Whether the token dump was written
    pub wrote_tokens: bool,
    pub diagnostics: Vec<LexError>,
}

/// Settings for one driver run
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub out_dir: Option<PathBuf>,
    pub write_tokens: bool,
    pub options: CompileOptions,
}

/// Read `input`, translate it, and write the artifacts.
pub fn translate_file(input: &Path, config: &RunConfig) -> Result<Report> {
    let paths = OutputPaths::for_input(input, config.out_dir.as_deref())?;

    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read '{}'", input.display()))?;

    let compilation = compile(&source, &config.options)?;

    if let Some(dir) = &config.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create '{}'", dir.display()))?;
    }

    if config.write_tokens {
        write_artifact(&paths.tokens, &compilation.token_dump)?;
    }
    write_artifact(&paths.python, &compilation.python)?;

    Ok(Report {
        paths,
        wrote_tokens: config.write_tokens,
        diagnostics: compilation.diagnostics,
    })
}

/// Lexical diagnostics carried by a failed [`translate_file`] run.
///
/// Empty unless the failure was a syntax error.
pub fn failure_diagnostics(err: &anyhow::Error) -> &[LexError] {
    err.downcast_ref::<CompileError>()
        .map(CompileError::diagnostics)
        .unwrap_or_default()
}

/// Console tag such as `error:`, bold and colored only when `styled`.
pub fn label(text: &str, color: Color, styled: bool) -> String {
    if styled {
        text.with(color).bold().to_string()
    } else {
        text.to_string()
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write '{}'", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths_next_to_input() {
        let paths = OutputPaths::for_input(Path::new("work/prog.cppy"), None).unwrap();

        assert_eq!(paths.tokens, PathBuf::from("work/prog_tokens.txt"));
        assert_eq!(paths.python, PathBuf::from("work/prog.py"));
    }

    #[test]
    fn test_output_paths_bare_file_name() {
        let paths = OutputPaths::for_input(Path::new("prog.cppy"), None).unwrap();

        assert_eq!(paths.python, PathBuf::from("prog.py"));
    }

    #[test]
    fn test_output_paths_with_out_dir() {
        let paths =
            OutputPaths::for_input(Path::new("src/a.b.cppy"), Some(Path::new("build"))).unwrap();

        assert_eq!(paths.tokens, PathBuf::from("build/a.b_tokens.txt"));
        assert_eq!(paths.python, PathBuf::from("build/a.b.py"));
    }

    #[test]
    fn test_wrong_extension() {
        for input in ["prog.c", "prog", "prog.cppy.txt"] {
            assert!(matches!(
                OutputPaths::for_input(Path::new(input), None),
                Err(DriverError::WrongExtension(_))
            ));
        }
    }

    #[test]
    fn test_label_styling_is_optional() {
        assert_eq!(label("error:", Color::Red, false), "error:");

        let styled = label("error:", Color::Red, true);
        assert!(styled.contains("error:"));
        assert!(styled.contains("\x1b["));
    }

    #[test]
    fn test_failure_diagnostics_of_other_errors() {
        let err = anyhow::Error::new(DriverError::WrongExtension(PathBuf::from("a.c")));

        assert!(failure_diagnostics(&err).is_empty());
    }
}
