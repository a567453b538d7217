use assert_cmd::cargo::cargo_bin_cmd;
use dialsort_core::domain::CellValue;
use dialsort_io::read_table;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONTACTS: &str = "\
Owner 1 Full Name,Owner 1 First Name,Owner 1 Last Name,Parcel State,Parcel County,Phone,Phone (Line Type),Alt Phone 1,Alt Phone 1 (Line Type)
Ada Lovelace,Ada,Lovelace,PA,Erie,5551112222,Mobile,,
Bo Jones,Bo,Jones,PA,Erie,4445556666,Landline,,
Cy Young,,,PA,Erie,,,,
";

const OWNERS: &str = "\
Owner Name,City
FIRST BAPTIST CHURCH,Erie
Jane Smith,Erie
Smith Family Trust,Erie
";

fn write_input(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input");
    path.to_str().expect("input path").to_string()
}

fn run_json(config: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("dialsort")
        .args(["--config", config.to_str().expect("config path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn empty_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, "").expect("write config");
    path
}

#[test]
fn process_writes_named_outputs_and_reports_json() {
    let temp = TempDir::new().expect("temp dir");
    let config = empty_config(temp.path());
    let input = write_input(temp.path(), "erie.csv", CONTACTS);
    let out_dir = temp.path().to_str().expect("out dir");

    let report = run_json(
        &config,
        &[
            "process",
            input.as_str(),
            "--out-dir",
            out_dir,
            "--date",
            "2024-10-18",
            "--format",
            "csv",
        ],
    );
    assert_eq!(report["original_rows"], 3);
    assert_eq!(report["cleaned_rows"], 1);
    assert_eq!(report["discard_rows"], 2);
    assert_eq!(report["counts_match"], true);
    let summary = report["qa_summary"].as_array().expect("summary");
    assert_eq!(summary[4]["result"], "MATCH");

    let cleaned = temp.path().join("PAErieOct18LCT.csv");
    assert_eq!(report["cleaned_output"], cleaned.display().to_string());
    let cleaned = fs::read_to_string(cleaned).expect("cleaned file");
    assert_eq!(cleaned.lines().count(), 2);
    assert!(cleaned.lines().nth(1).expect("row").starts_with("Ada,Lovelace,"));

    let discard =
        fs::read_to_string(temp.path().join("PAErieOct18LandlinesNoNumber.csv")).expect("discard");
    assert_eq!(discard.lines().count(), 3);
    assert!(temp.path().join("PAErieOct18QAReport.csv").exists());
}

#[test]
fn process_writes_workbooks_by_default() {
    let temp = TempDir::new().expect("temp dir");
    let config = empty_config(temp.path());
    let input = write_input(temp.path(), "erie.csv", CONTACTS);
    let out_dir = temp.path().to_str().expect("out dir");

    let report = run_json(
        &config,
        &["process", input.as_str(), "--out-dir", out_dir, "--date", "2024-10-18"],
    );
    let qa_path = temp.path().join("PAErieOct18QAReport.xlsx");
    assert_eq!(report["qa_output"], qa_path.display().to_string());

    let cleaned = read_table(&temp.path().join("PAErieOct18LCT.xlsx")).expect("cleaned");
    assert_eq!(cleaned.len(), 1);
    let row = cleaned.row(0).expect("row");
    assert_eq!(row.get("Phone1"), Some(&CellValue::text("5551112222")));

    let qa = read_table(&qa_path).expect("qa workbook");
    assert_eq!(qa.header().names(), &["QA CHECK", "RESULT"]);
    assert!(!temp.path().join("PAErieOct18LCT.csv").exists());
}

#[test]
fn process_prints_summary_without_json() {
    let temp = TempDir::new().expect("temp dir");
    let config = empty_config(temp.path());
    let input = write_input(temp.path(), "erie.csv", CONTACTS);

    let output = cargo_bin_cmd!("dialsort")
        .args(["--config", config.to_str().expect("config path")])
        .args(["process", input.as_str(), "--out-dir"])
        .arg(temp.path())
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Cleaned: 1"));
    assert!(stdout.contains("Contact Count Verification"));
    assert!(stdout.contains("MATCH"));
}

#[test]
fn process_honors_configured_line_types() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        "[line_types]\nallowed = [\"mobile\", \"landline\"]\ndiscardable = [\"voip\"]\n",
    )
    .expect("write config");
    let input = write_input(temp.path(), "erie.csv", CONTACTS);
    let out_dir = temp.path().to_str().expect("out dir");

    let report = run_json(&config, &["process", input.as_str(), "--out-dir", out_dir]);
    assert_eq!(report["cleaned_rows"], 2);
    assert_eq!(report["discard_rows"], 1);
}

#[test]
fn process_missing_input_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let config = empty_config(temp.path());
    let missing = temp.path().join("missing.csv");

    let output = cargo_bin_cmd!("dialsort")
        .args(["--config", config.to_str().expect("config path"), "process"])
        .arg(&missing)
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("missing.csv"));
}

#[test]
fn process_rejects_bad_date_and_unknown_format() {
    let temp = TempDir::new().expect("temp dir");
    let config = empty_config(temp.path());
    let input = write_input(temp.path(), "erie.csv", CONTACTS);
    let notes = write_input(temp.path(), "notes.txt", "hello");

    let bad_date = cargo_bin_cmd!("dialsort")
        .args(["--config", config.to_str().expect("config path")])
        .args(["process", input.as_str(), "--date", "18/10/2024"])
        .output()
        .expect("run command");
    assert_eq!(bad_date.status.code(), Some(3));

    let bad_format = cargo_bin_cmd!("dialsort")
        .args(["--config", config.to_str().expect("config path")])
        .args(["process", notes.as_str(), "--out-dir"])
        .arg(temp.path())
        .output()
        .expect("run command");
    assert_eq!(bad_format.status.code(), Some(3));
}

#[test]
fn invalid_config_exits_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("config.toml");
    fs::write(&config, "[line_types]\ndiscardable = [\"mobile\"]\n").expect("write config");
    let input = write_input(temp.path(), "erie.csv", CONTACTS);

    let output = cargo_bin_cmd!("dialsort")
        .args(["--config", config.to_str().expect("config path")])
        .args(["process", input.as_str()])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn scrub_splits_owner_list() {
    let temp = TempDir::new().expect("temp dir");
    let config = empty_config(temp.path());
    let input = write_input(temp.path(), "owners.csv", OWNERS);

    let report = run_json(
        &config,
        &["scrub", input.as_str(), "--keyword", "Trust", "--format", "csv"],
    );
    assert_eq!(report["column"], "Owner Name");
    assert_eq!(report["original_rows"], 3);
    assert_eq!(report["removed_rows"], 2);
    assert_eq!(report["remaining_rows"], 1);
    assert_eq!(
        report["removed_names"],
        serde_json::json!(["FIRST BAPTIST CHURCH", "Smith Family Trust"])
    );

    let kept = fs::read_to_string(temp.path().join("owners_cleaned.csv")).expect("kept file");
    assert_eq!(kept, "Owner Name,City\nJane Smith,Erie\n");
    let removed = fs::read_to_string(temp.path().join("owners_removed.csv")).expect("removed");
    assert_eq!(removed.lines().count(), 3);
}

#[test]
fn scrub_unknown_column_is_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let config = empty_config(temp.path());
    let input = write_input(temp.path(), "owners.csv", OWNERS);

    let output = cargo_bin_cmd!("dialsort")
        .args(["--config", config.to_str().expect("config path")])
        .args(["scrub", input.as_str(), "--column", "Grantee"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    assert!(!temp.path().join("owners_cleaned.xlsx").exists());
}

#[test]
fn completions_do_not_need_config() {
    let output = cargo_bin_cmd!("dialsort")
        .args(["--config", "/nonexistent/dialsort.toml", "completions", "bash"])
        .output()
        .expect("run command");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("dialsort"));
}
