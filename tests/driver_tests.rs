// End-to-end tests for the file driver

use cppyc::driver::{failure_diagnostics, translate_file, DriverError, RunConfig};
use cppyc::CompileError;
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cppyc-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn config(out_dir: &Path) -> RunConfig {
    RunConfig {
        out_dir: Some(out_dir.to_path_buf()),
        write_tokens: true,
        ..RunConfig::default()
    }
}

#[test]
fn test_writes_both_artifacts() {
    let dir = scratch_dir("both");

    let report = translate_file(&demo("showcase.cppy"), &config(&dir)).expect("Driver failed");

    assert_eq!(report.paths.tokens, dir.join("showcase_tokens.txt"));
    assert_eq!(report.paths.python, dir.join("showcase.py"));
    assert!(report.diagnostics.is_empty());

    let python = fs::read_to_string(&report.paths.python).unwrap();
    assert!(python.starts_with("# Code automatically generated by the cppy-compiler\n\n"));

    let tokens = fs::read_to_string(&report.paths.tokens).unwrap();
    assert!(tokens.starts_with("int -> reserved word\ncount -> identifier\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_input_directory_is_default_output() {
    let dir = scratch_dir("beside");
    let input = dir.join("prog.cppy");
    fs::write(&input, "print(1);").unwrap();

    let config = RunConfig {
        write_tokens: true,
        ..RunConfig::default()
    };
    translate_file(&input, &config).expect("Driver failed");

    assert!(dir.join("prog.py").exists());
    assert!(dir.join("prog_tokens.txt").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_syntax_error_writes_nothing() {
    let dir = scratch_dir("broken");

    let err = translate_file(&demo("broken.cppy"), &config(&dir)).unwrap_err();

    assert!(err.downcast_ref::<CompileError>().is_some());
    assert!(err.to_string().contains("Syntax error at ')' on line 3"));
    assert!(!dir.join("broken.py").exists());
    assert!(!dir.join("broken_tokens.txt").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_syntax_error_keeps_lexical_diagnostics() {
    let dir = scratch_dir("illegal");
    let input = dir.join("prog.cppy");
    fs::write(&input, "x = @;").unwrap();

    let err = translate_file(&input, &config(&dir)).unwrap_err();

    let diagnostics = failure_diagnostics(&err);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(), "Illegal character '@' on line 1");
    assert!(!dir.join("prog.py").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_no_tokens_flag() {
    let dir = scratch_dir("notokens");
    let config = RunConfig {
        write_tokens: false,
        ..config(&dir)
    };

    let report = translate_file(&demo("showcase.cppy"), &config).expect("Driver failed");

    assert!(!report.wrote_tokens);
    assert!(report.paths.python.exists());
    assert!(!report.paths.tokens.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_rejects_wrong_extension() {
    let dir = scratch_dir("ext");
    let input = dir.join("prog.txt");
    fs::write(&input, "print(1);").unwrap();

    let err = translate_file(&input, &config(&dir)).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DriverError>(),
        Some(DriverError::WrongExtension(_))
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_input_file() {
    let dir = scratch_dir("missing");

    let err = translate_file(&dir.join("absent.cppy"), &config(&dir)).unwrap_err();

    assert!(err.to_string().contains("failed to read"));

    let _ = fs::remove_dir_all(&dir);
}
