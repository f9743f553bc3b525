use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn invoice_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("invoice-gen"));
    cmd.current_dir(dir);
    cmd
}

const CONFIG: &str = r#"name: Test Business
address: 1 Test St
city_province_country: Testville, TS, Testland
postal_code: T3S 1T1
phone: 555-0100
email: billing@test.example
owner: Pat Tester
abrv: TB
tax_rate: 0.05
tax_desc: GST
customers:
  - id: 1
    name: Acme Widgets
    address: 9 Acme Way
    city_province_country: Acme City, AC, Acmeland
    postal_code: A1A 1A1
    phone: 555-0199
    currency: CAD
    items:
      - desc: Widget maintenance
        hours: 10
        rate: 50
  - id: 2
    name: Globex Corp
    address: 2 Globex Plaza
    city_province_country: Globex City, GC, Globexland
    postal_code: G1G 1G1
    phone: 555-0150
    currency: EUR
"#;

fn write_config(dir: &Path) {
    fs::write(dir.join("config.yaml"), CONFIG).unwrap();
}

fn yaml_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".yaml"))
        .collect()
}

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate invoice PDFs from YAML data files",
        ));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("invoice-gen"));
}

#[test]
fn test_missing_config_scaffolds_placeholder_and_stops() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Missing config, please fill it in and try again.",
        ));

    let config = fs::read_to_string(temp_dir.path().join("config.yaml")).unwrap();
    assert!(config.contains("[BUSINESS_NAME]"));
    assert!(config.contains("customers:"));
}

#[test]
fn test_list_customers() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    invoice_cmd(temp_dir.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Widgets"))
        .stdout(predicate::str::contains("Globex Corp"))
        .stdout(predicate::str::contains("EUR"));
}

#[test]
fn test_non_numeric_customer_id() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    invoice_cmd(temp_dir.path())
        .arg("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid customer_id value 'abc'"));
}

#[test]
fn test_unknown_customer_id_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    invoice_cmd(temp_dir.path())
        .arg("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Customer with id '99' does not exist",
        ));

    // Only the config itself is on disk.
    assert_eq!(yaml_files(temp_dir.path()), vec!["config.yaml".to_string()]);
}

#[test]
fn test_init_scaffolds_invoice_data_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    invoice_cmd(temp_dir.path())
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created "));

    let date = chrono::Local::now().format("%d%m%Y").to_string();
    let prefix = format!("Test_Business_-_Acme_Widgets_Invoice_-_TB{date}");

    let created: Vec<String> = yaml_files(temp_dir.path())
        .into_iter()
        .filter(|name| name != "config.yaml")
        .collect();
    assert_eq!(created.len(), 1);
    assert!(created[0].starts_with(&prefix), "got {}", created[0]);
    // Five uppercase-alphanumeric characters between the date and extension.
    let suffix = created[0]
        .strip_prefix(&prefix)
        .unwrap()
        .strip_suffix(".yaml")
        .unwrap();
    assert_eq!(suffix.len(), 5);
    assert!(suffix
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));

    // The scaffold carries the customer's currency and default items.
    let data = fs::read_to_string(temp_dir.path().join(&created[0])).unwrap();
    assert!(data.contains("customer_id: 1"));
    assert!(data.contains("invoice_type: invoice"));
    assert!(data.contains("currency: CAD"));
    assert!(data.contains("Widget maintenance"));
}

#[test]
fn test_init_without_default_items_uses_placeholder() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    invoice_cmd(temp_dir.path()).arg("2").assert().success();

    let created: Vec<String> = yaml_files(temp_dir.path())
        .into_iter()
        .filter(|name| name != "config.yaml")
        .collect();
    assert_eq!(created.len(), 1);
    assert!(created[0].starts_with("Test_Business_-_Globex_Corp_Invoice_-_TB"));

    let data = fs::read_to_string(temp_dir.path().join(&created[0])).unwrap();
    assert!(data.contains("currency: EUR"));
    assert!(data.contains("[DESCRIPTION]"));
}

#[test]
fn test_build_missing_data_file() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    invoice_cmd(temp_dir.path())
        .args(["-b", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invoice data file 'nope.yaml' does not exist.",
        ));
}

#[test]
fn test_build_with_unknown_customer_in_data() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    fs::write(
        temp_dir.path().join("orphan.yaml"),
        r#"customer_id: 42
invoice_type: invoice
invoice_date: Aug 06, 2026
invoice_number: TB06082026A1B2C
currency: CAD
items:
  - desc: Work
    hours: 1
    rate: 100
"#,
    )
    .unwrap();

    invoice_cmd(temp_dir.path())
        .args(["-b", "orphan.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Customer with id '42' does not exist",
        ));
}

#[test]
fn test_no_arguments_prints_help() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path());

    invoice_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_custom_config_path() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("alt.yaml"), CONFIG).unwrap();

    invoice_cmd(temp_dir.path())
        .args(["-c", "alt.yaml", "-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Widgets"));
}
