use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetbuddy(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetbuddy").unwrap();
    cmd.env("BUDGETBUDDY_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add_sample_expenses(data_dir: &TempDir) {
    for (date, category, amount, notes) in [
        ("2024-01-05", "Food", "20.00", "lunch"),
        ("2024-01-20", "Food", "30.00", "dinner"),
        ("2024-02-01", "Transport", "15.00", "bus"),
    ] {
        budgetbuddy(data_dir)
            .args(["expense", "add", date, category, amount, "--notes", notes])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added expense exp-"));
    }
}

#[test]
fn init_creates_settings() {
    let data_dir = TempDir::new().unwrap();

    budgetbuddy(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized BudgetBuddy"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn html_report_end_to_end() {
    let data_dir = TempDir::new().unwrap();
    add_sample_expenses(&data_dir);

    let output = data_dir.path().join("report.html");
    budgetbuddy(&data_dir)
        .arg("report")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML report written to:"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<tr><td>2024-01</td><td>50.00</td></tr>"));
    assert!(html.contains("<p class=\"total\">Grand Total: 65.00</p>"));
    let bus = html.find("<td>bus</td>").unwrap();
    let lunch = html.find("<td>lunch</td>").unwrap();
    assert!(bus < lunch);
}

#[test]
fn text_report_with_explicit_format() {
    let data_dir = TempDir::new().unwrap();
    add_sample_expenses(&data_dir);

    let output = data_dir.path().join("report.out");
    budgetbuddy(&data_dir)
        .arg("report")
        .arg(&output)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Text report written to:"));

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("BUDGETBUDDY EXPENSE REPORT"));
    assert!(text.contains("GRAND TOTAL: 65.00"));
}

#[test]
fn report_on_empty_data_succeeds() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("empty.txt");

    budgetbuddy(&data_dir)
        .arg("report")
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("GRAND TOTAL: 0.00"));
}

#[test]
fn report_into_missing_directory_fails() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("no").join("such").join("report.html");

    budgetbuddy(&data_dir)
        .arg("report")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export error"));
}

#[test]
fn add_rejects_bad_input() {
    let data_dir = TempDir::new().unwrap();

    budgetbuddy(&data_dir)
        .args(["expense", "add", "2024-13-01", "Food", "1.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    budgetbuddy(&data_dir)
        .args(["expense", "add", "2024-01-01", "Food", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount format"));

    budgetbuddy(&data_dir)
        .args(["expense", "add", "2024-01-01", "Food", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn summary_for_month() {
    let data_dir = TempDir::new().unwrap();
    add_sample_expenses(&data_dir);

    budgetbuddy(&data_dir)
        .args(["summary", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories for 2024-01"))
        .stdout(predicate::str::contains("Transport").not());
}

#[test]
fn import_then_list() {
    let data_dir = TempDir::new().unwrap();
    let csv_path = data_dir.path().join("in.csv");
    std::fs::write(
        &csv_path,
        "date,category,amount,notes\n2024-03-01,Rent,900.00,march\nbad,Rent,1,x\n",
    )
    .unwrap();

    budgetbuddy(&data_dir)
        .args(["expense", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 expense(s)"))
        .stdout(predicate::str::contains("row 2"));

    budgetbuddy(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("900.00"));
}

#[test]
fn export_csv() {
    let data_dir = TempDir::new().unwrap();
    add_sample_expenses(&data_dir);

    let output = data_dir.path().join("out.csv");
    budgetbuddy(&data_dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "csv"])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.contains("2024-02-01,Transport,15.00,bus"));
}
