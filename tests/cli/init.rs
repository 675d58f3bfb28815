use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "water-extensions",
        "ground-directory",
        "strings-sheet-url",
        "api-key-file",
        "strings-sheet-index",
        "strings-column-index",
        "water-file",
        "ignores",
        "sheet-timeout-secs",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{}' field", field);
    }
    assert_eq!(parsed["water-extensions"], ".java, .jsp, .js");
    assert_eq!(parsed["water-file"], "water.txt");
    assert!(parsed["strings-sheet-url"].is_null());

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    let printed = stdout(&output);
    insta::assert_snapshot!(printed.trim_end(), @"✓ Created .dowserrc.json");
    assert!(test.root().join(".dowserrc.json").exists());

    let content = test.read_file(".dowserrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dowserrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".dowserrc.json already exists"));
    assert_eq!(test.read_file(".dowserrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("water.txt", "app.title\n")?;
    test.write_file("src/App.java", r#"String title = t("app.title");"#)?;

    let output = test.divine_command().output()?;
    assert!(
        output.status.success(),
        "Divine command should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("Found all 1 string"));

    Ok(())
}
