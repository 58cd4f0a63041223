use assert_cmd::Command;
use std::fs;

fn bin() -> Command {
    Command::cargo_bin("mews-tools").unwrap()
}

#[test]
fn test_lists_prints_sorted_tables() {
    bin()
        .arg("lists")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            r#"GENDER: ["Female", "Male", "Other"]"#,
        ))
        .stdout(predicates::str::contains(
            r#"MARITAL_STATUS: ["Divorced", "Married", "Unmarried", "Widowed"]"#,
        ));
}

#[test]
fn test_normalize_rewrites_lookup_files() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("casteSubCastes.json"),
        r#"["b", "a", "c"]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("subCastes.json"),
        r#"{"b": ["y", "x"], "a": ["z"]}"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("constituencyData.js"),
        "export const wards = [\"banana\", \"apple\"];\n",
    )
    .unwrap();

    bin()
        .arg("normalize")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Sorted casteSubCastes.json"))
        .stdout(predicates::str::contains("Sorted subCastes.json"))
        .stdout(predicates::str::contains("Processed constituencyData.js"))
        // partnerCastes.json was never created
        .stdout(predicates::str::contains("File not found"));

    let castes = fs::read_to_string(temp.path().join("casteSubCastes.json")).unwrap();
    assert_eq!(castes, "[\n    \"a\",\n    \"b\",\n    \"c\"\n]");

    let wards = fs::read_to_string(temp.path().join("constituencyData.js")).unwrap();
    assert_eq!(wards, "export const wards = [\"apple\", \"banana\"];\n");
}

#[test]
fn test_normalize_is_idempotent() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("partnerCastes.json"), r#"["b", "a"]"#).unwrap();
    fs::write(
        temp.path().join("constituencyData.js"),
        "const x = [\"b\", \"a\"];\n",
    )
    .unwrap();

    bin()
        .arg("normalize")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success();

    let first_json = fs::read_to_string(temp.path().join("partnerCastes.json")).unwrap();
    let first_js = fs::read_to_string(temp.path().join("constituencyData.js")).unwrap();

    bin()
        .arg("normalize")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "No changes needed for constituencyData.js",
        ));

    assert_eq!(
        fs::read_to_string(temp.path().join("partnerCastes.json")).unwrap(),
        first_json
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("constituencyData.js")).unwrap(),
        first_js
    );
}

#[test]
fn test_normalize_exits_zero_on_per_file_failures() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("casteSubCastes.json"), "{not json").unwrap();

    bin()
        .arg("normalize")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Error processing casteSubCastes.json:",
        ));
}
