//! CLI integration tests for schema-describe binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("schema-describe"))
}

// Helper to create a temp schema file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const TOOL_SCHEMA: &str = r#"{
    "type": "object",
    "required": ["query"],
    "properties": {
        "query": { "type": "string", "description": "Search text" },
        "tags": { "type": "array", "items": { "type": "string" } }
    }
}"#;

mod describe_command {
    use super::*;

    #[test]
    fn text_output() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", TOOL_SCHEMA);

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout("query*: string\n  Search text\ntags: string[]\n");
    }

    #[test]
    fn json_output() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", TOOL_SCHEMA);

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""status":"fields""#))
            .stdout(predicate::str::contains(r#""displayType":"string[]""#));
    }

    #[test]
    fn json_pretty_output() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", TOOL_SCHEMA);

        cmd()
            .args([
                "describe",
                schema.to_str().unwrap(),
                "--format",
                "json",
                "--pretty",
            ])
            .assert()
            .success()
            // Pretty output has newlines and indentation
            .stdout(predicate::str::contains("{\n"));
    }

    #[test]
    fn empty_schema_reports_no_parameters() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", r#"{"type":"object"}"#);

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout("No parameters defined.\n");
    }

    #[test]
    fn pointer_selects_sub_schema() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "tools.json",
            r#"{
                "tools": [{
                    "name": "lookup",
                    "inputSchema": {
                        "type": "object",
                        "properties": { "id": { "type": "integer" } }
                    }
                }]
            }"#,
        );

        cmd()
            .args([
                "describe",
                schema.to_str().unwrap(),
                "--pointer",
                "#/tools/0/inputSchema",
            ])
            .assert()
            .success()
            .stdout("id: integer\n");
    }

    #[test]
    fn output_file() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", TOOL_SCHEMA);
        let output = dir.path().join("out.txt");

        cmd()
            .args([
                "describe",
                schema.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("query*: string"));
    }

    #[test]
    fn truthy_literals_flag() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "schema.json",
            r#"{"properties":{"n":{"type":"integer","default":0}}}"#,
        );

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("default: 0"));

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--truthy-literals"])
            .assert()
            .success()
            .stdout("n: integer\n");
    }

    #[test]
    fn max_depth_flag() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "schema.json",
            r#"{"properties":{"a":{"type":"object","properties":{"b":{"type":"string"}}}}}"#,
        );

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--max-depth", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("not expanded"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_file_exits_with_io_code() {
        cmd()
            .args(["describe", "/nonexistent/schema.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn invalid_json_exits_with_schema_code() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", "not json");

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));
    }

    #[test]
    fn malformed_type_exits_with_schema_code() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "schema.json",
            r#"{"properties":{"a":{"type":42}}}"#,
        );

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid schema"));
    }

    #[test]
    fn missing_pointer_exits_with_schema_code() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", TOOL_SCHEMA);

        cmd()
            .args([
                "describe",
                schema.to_str().unwrap(),
                "--pointer",
                "#/$defs/missing",
            ])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("pointer not found"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "schema.json", TOOL_SCHEMA);

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--format", "yaml"])
            .assert()
            .failure();
    }
}
