use std::fs;
use std::path::Path;

use tempfile::TempDir;

use xml_checks::output::{XML_SYNTAX_CHECK_FAILED_INDICATOR, XML_SYNTAX_CHECK_PASSED_INDICATOR};
use xml_checks::syntax_check::SyntaxCheckRunner;

const VALID_XML: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<shape xmlns:android="http://schemas.android.com/apk/res/android"
  android:shape="rectangle">
  <solid android:color="#3333334D" />
  <size android:height="1dp" />
</shape>"##;

const MISMATCHED_END_TAG_XML: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<shape xmlns:android="http://schemas.android.com/apk/res/android"
  android:shape="rectangle">
  <solid android:color="#3333334D" />
  <size android:height="1dp" />
</shapes>"##;

const TRUNCATED_TAG_XML: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<shape xmlns:android="http://schemas.android.com/apk/res/android"
  android:shape="rectangle">
  <size"##;

/// Split a report line of the form `<path>:<line>:<column>: <message>`.
fn parse_report_line<'a>(line: &'a str, path: &Path) -> (u64, u64, &'a str) {
    let prefix = format!("{}:", path.display());
    let rest = line
        .strip_prefix(&prefix)
        .unwrap_or_else(|| panic!("line does not start with {}: {}", prefix, line));
    let mut parts = rest.splitn(3, ':');
    let line_no = parts.next().unwrap().parse().unwrap();
    let column = parts.next().unwrap().parse().unwrap();
    let message = parts.next().unwrap().trim_start();
    (line_no, column, message)
}

#[test]
fn valid_xml_passes_with_indicator_only() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("TestFile.xml"), VALID_XML).unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();

    assert!(outcome.passed);
    assert_eq!(outcome.report, XML_SYNTAX_CHECK_PASSED_INDICATOR);
}

#[test]
fn mismatched_end_tag_reports_one_located_problem() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("TestFile.xml");
    fs::write(&file, MISMATCHED_END_TAG_XML).unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();

    assert!(!outcome.passed);
    let lines: Vec<&str> = outcome.report.lines().collect();
    assert_eq!(lines.len(), 1);

    let (line, column, message) = parse_report_line(lines[0], &file);
    // The mismatched closing tag sits on line 6.
    assert_eq!(line, 6);
    assert!(column >= 1);
    assert!(!message.is_empty());
}

#[test]
fn truncated_tag_reports_a_problem() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("TestFile.xml");
    fs::write(&file, TRUNCATED_TAG_XML).unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();

    assert!(!outcome.passed);
    let lines: Vec<&str> = outcome.report.lines().collect();
    assert!(!lines.is_empty());
    let (line, _, _) = parse_report_line(lines[0], &file);
    assert_eq!(line, 4);
}

#[test]
fn latin1_encoded_file_passes_on_its_structure() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("strings.xml"),
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<resources>\n  <string name=\"cafe\">caf\xe9</string>\n</resources>",
    )
    .unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();

    assert!(outcome.passed);
    assert_eq!(outcome.report, XML_SYNTAX_CHECK_PASSED_INDICATOR);
}

#[test]
fn latin1_encoded_file_does_not_abort_the_scan() {
    let temp_dir = TempDir::new().unwrap();
    let latin1 = temp_dir.path().join("strings.xml");
    fs::write(
        &latin1,
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<resources>\n  <string name=\"cafe\">caf\xe9</string>\n</resources>",
    )
    .unwrap();
    let broken = temp_dir.path().join("truncated.xml");
    fs::write(&broken, TRUNCATED_TAG_XML).unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();

    // The undecodable bytes must not escalate into a fatal error; the
    // malformed sibling is still reported.
    assert!(!outcome.passed);
    assert!(outcome.report.contains(broken.to_str().unwrap()));
    assert!(!outcome.report.contains(latin1.to_str().unwrap()));
}

#[test]
fn multiple_invalid_files_all_reported_in_reverse_scan_order() {
    let temp_dir = TempDir::new().unwrap();
    let file1 = temp_dir.path().join("TestFile1.xml");
    let file2 = temp_dir.path().join("TestFile2.xml");
    fs::write(&file1, TRUNCATED_TAG_XML).unwrap();
    fs::write(&file2, MISMATCHED_END_TAG_XML).unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();

    assert!(!outcome.passed);
    assert!(outcome.report.contains(file1.to_str().unwrap()));
    assert!(outcome.report.contains(file2.to_str().unwrap()));

    // TestFile2 is scanned after TestFile1 and therefore reported first.
    let pos1 = outcome.report.find(file1.to_str().unwrap()).unwrap();
    let pos2 = outcome.report.find(file2.to_str().unwrap()).unwrap();
    assert!(pos2 < pos1);
}

#[test]
fn problems_in_nested_directories_are_found() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("res").join("drawable");
    fs::create_dir_all(&nested).unwrap();
    let file = nested.join("shape.xml");
    fs::write(&file, MISMATCHED_END_TAG_XML).unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();

    assert!(!outcome.passed);
    assert!(outcome.report.contains(file.to_str().unwrap()));
}

#[test]
fn failed_check_escalates_with_indicator() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("TestFile.xml"), MISMATCHED_END_TAG_XML).unwrap();

    let outcome = SyntaxCheckRunner::new().check(temp_dir.path()).unwrap();
    let err = outcome
        .into_result(XML_SYNTAX_CHECK_FAILED_INDICATOR)
        .unwrap_err();

    assert!(err.to_string().contains("XML SYNTAX CHECK FAILED"));
}

#[test]
fn reports_are_byte_identical_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("TestFile1.xml"), TRUNCATED_TAG_XML).unwrap();
    fs::write(temp_dir.path().join("TestFile2.xml"), MISMATCHED_END_TAG_XML).unwrap();
    fs::write(temp_dir.path().join("TestFile3.xml"), VALID_XML).unwrap();

    let runner = SyntaxCheckRunner::new();
    let first = runner.check(temp_dir.path()).unwrap();
    let second = runner.check(temp_dir.path()).unwrap();

    assert_eq!(first.report, second.report);
    assert_eq!(first.passed, second.passed);
}
