use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_reports_missing_string() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "HELLO\nMISSING\n")?;
    test.write_file("ground/greet.txt", "say HELLO world")?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "missing: \"MISSING\"\n\n\u{2718} 1 of 2 strings not found (1 file searched)\n"
    );
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_all_strings_found() -> Result<()> {
    let test = CliTest::with_manifest(".java, .js", "app.title\napp.subtitle\n")?;
    test.write_file("ground/App.java", r#"t("app.title");"#)?;
    test.write_file("ground/web/app.js", r#"t("app.subtitle")"#)?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let printed = stdout(&output);
    insta::assert_snapshot!(printed.trim_end(), @"✓ Found all 2 strings (2 files searched)");

    Ok(())
}

#[test]
fn test_duplicates_are_reported_each_time() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "A\nA\nB\n")?;
    test.write_file("ground/empty.txt", "nothing to see")?;

    let output = test.divine_command().args(["--format", "plain"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "A\nA\nB\n");

    Ok(())
}

#[test]
fn test_files_with_other_extensions_are_not_searched() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "KEY1\n")?;
    test.write_file("ground/notes.md", "KEY1")?;
    test.write_file("ground/README", "KEY1")?;
    test.write_file("ground/.txt", "KEY1")?;
    test.write_file("ground/other.txt", "nothing")?;

    let output = test.divine_command().args(["--format", "plain"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "KEY1\n");

    Ok(())
}

#[test]
fn test_undecodable_file_is_skipped_with_warning() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "KEY\n")?;
    test.write_bytes("ground/a/bad.txt", &[0xff, 0xfe, 0xfd])?;
    test.write_file("ground/b/good.txt", "KEY")?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Found all 1 string"));
    assert!(
        stderr(&output).contains("1 file(s) could not be decoded as UTF-8"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_verbose_logs_each_undecodable_file() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "KEY\n")?;
    test.write_bytes("ground/bad.txt", &[0xc3, 0x28])?;

    let output = test.divine_command().arg("-v").output()?;
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(err.contains("bad.txt: not valid UTF-8"), "stderr: {}", err);
    assert!(err.contains("resolved 1 target string(s)"), "stderr: {}", err);
    assert!(!err.contains("use -v for details"), "stderr: {}", err);

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_manifest(".js", "one\ntwo\n")?;
    test.write_file("ground/a.js", "one")?;
    test.write_file("ground/b.css", "two")?;

    let output = test.divine_command().args(["--format", "json"]).output()?;
    let json: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json["notFound"], serde_json::json!(["two"]));
    assert_eq!(json["targetCount"], 2);
    assert_eq!(json["enumeratedFiles"], 2);
    assert_eq!(json["scannedFiles"], 1);
    assert_eq!(json["skippedByExtension"], 1);
    assert_eq!(json["decodeWarnings"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_empty_manifest_succeeds() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "")?;
    test.write_file("ground/a.txt", "anything")?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No target strings to look for"));

    Ok(())
}

#[test]
fn test_ignored_paths_are_not_searched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".dowserrc.json",
        r#"{
  "water-extensions": ".js",
  "ground-directory": "ground",
  "water-file": "water.txt",
  "ignores": ["vendor", "**/*.min.js"]
}"#,
    )?;
    test.write_file("water.txt", "used\nvendored\nminified\n")?;
    test.write_file("ground/app.js", "used")?;
    test.write_file("ground/vendor/lib.js", "vendored")?;
    test.write_file("ground/dist/app.min.js", "minified")?;

    let output = test.divine_command().args(["--format", "plain"]).output()?;

    assert_eq!(stdout(&output), "vendored\nminified\n");

    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "FROM_CONFIG\n")?;
    test.write_file("other/strings.lst", "FROM_CLI\nABSENT\n")?;
    test.write_file("elsewhere/code.kt", "FROM_CLI")?;

    let output = test
        .divine_command()
        .args([
            "--water-file",
            "other/strings.lst",
            "--ground-directory",
            "elsewhere",
            "--water-extensions",
            ".kt",
            "--format",
            "plain",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "ABSENT\n");

    Ok(())
}

#[test]
fn test_project_root_locates_config() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "HELLO\n")?;
    test.write_file("ground/greet.txt", "HELLO")?;
    test.write_file("unrelated/.keep", "")?;

    let output = test
        .divine_command()
        .current_dir(test.root().join("unrelated"))
        .arg("--project-root")
        .arg(test.root())
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    Ok(())
}

#[test]
fn test_missing_ground_directory_is_an_error() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "A\n")?;
    std::fs::remove_dir(test.root().join("ground"))?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("ground directory does not exist"));

    Ok(())
}

#[test]
fn test_ground_directory_must_be_a_directory() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "A\n")?;

    let output = test
        .divine_command()
        .args(["--ground-directory", "water.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("is not a directory"));

    Ok(())
}

#[test]
fn test_unreadable_manifest_is_an_error() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "A\n")?;
    std::fs::remove_file(test.root().join("water.txt"))?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("unable to understand what to divine from"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_no_string_source_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no string source"));

    Ok(())
}

#[test]
fn test_sheet_url_requires_api_key_file() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "A\n")?;
    test.write_file("ground/a.txt", "A")?;

    let output = test
        .divine_command()
        .args([
            "--strings-sheet-url",
            "https://docs.google.com/spreadsheets/d/abc/edit",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'api-key-file' is missing"));

    Ok(())
}

#[test]
fn test_unreadable_api_key_file_is_an_error() -> Result<()> {
    let test = CliTest::with_manifest(".txt", "A\n")?;

    let output = test
        .divine_command()
        .args([
            "--strings-sheet-url",
            "https://docs.google.com/spreadsheets/d/abc/edit",
        ])
        .env("DOWSER_API_KEY_FILE", "no-such-key.json")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("cannot read api-key-file"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dowserrc.json", r#"{ "water-extensions": " , " }"#)?;

    let output = test.divine_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'water-extensions' must name at least one extension"));

    Ok(())
}

#[test]
fn test_running_twice_gives_same_output() -> Result<()> {
    let test = CliTest::with_manifest(".js", "a\nb\nc\nd\n")?;
    test.write_file("ground/x/one.js", "a c")?;
    test.write_file("ground/y/two.js", "nothing")?;

    let first = test.divine_command().output()?;
    let second = test.divine_command().output()?;

    assert_eq!(stdout(&first), stdout(&second));
    assert!(stdout(&first).starts_with("missing: \"b\"\nmissing: \"d\"\n"));

    Ok(())
}
