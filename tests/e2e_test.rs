/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("protlinks").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("protlinks").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("protlinks")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("protlinks")
            .args(["-f", "invalid_format", "network", "-s", "9606", "-g", "TP53"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Score outside 0-1000
    #[test]
    fn test_exit_code_min_score_out_of_range() {
        cargo_bin_cmd!("protlinks")
            .args(["string", "-s", "9606", "-g", "TP53", "--min-score", "1001"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Malformed --option
    #[test]
    fn test_exit_code_option_without_value() {
        cargo_bin_cmd!("protlinks")
            .args(["biogrid", "-g", "MAPK10", "--search-names", "--option", "taxId"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - gene list without a search mode
    #[test]
    fn test_exit_code_missing_search_mode() {
        cargo_bin_cmd!("protlinks")
            .args(["biogrid", "-g", "MAPK10", "--access-key", "KEY"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("without a search mode"));
    }

    /// Exit code 3: Application error - unknown BioGRID option
    #[test]
    fn test_exit_code_invalid_biogrid_option() {
        cargo_bin_cmd!("protlinks")
            .args([
                "biogrid",
                "-g",
                "MAPK10",
                "--search-names",
                "--option",
                "fake=1",
                "--access-key",
                "KEY",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "'fake' is not a valid BioGRID argument",
            ));
    }

    /// Exit code 3: Application error - no access key anywhere
    #[test]
    fn test_exit_code_missing_access_key() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("protlinks")
            .current_dir(dir.path())
            .env_remove("ACCESS_KEY")
            .args(["biogrid", "-g", "MAPK10", "--search-names"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("access key is required"));
    }

    /// Exit code 3: Application error - species is not a taxonomy id
    #[test]
    fn test_exit_code_invalid_species() {
        cargo_bin_cmd!("protlinks")
            .args(["string", "-s", "human", "-g", "TP53"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid species identifier"));
    }

    /// Exit code 3: Application error - network species is not a taxonomy id
    #[test]
    fn test_exit_code_invalid_network_species() {
        cargo_bin_cmd!("protlinks")
            .args(["network", "-s", "9606a", "-g", "TP53"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid species identifier"));
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_config_min_score_out_of_range() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, "min_score: 5000\n").unwrap();

        cargo_bin_cmd!("protlinks")
            .args(["string", "-s", "9606", "-g", "TP53", "--config"])
            .arg(&config_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("min_score must be between 0 and 1000"));
    }

    #[test]
    fn test_config_missing_explicit_path() {
        cargo_bin_cmd!("protlinks")
            .args([
                "network",
                "-s",
                "9606",
                "-g",
                "TP53",
                "--config",
                "/nonexistent/protlinks.config.yml",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_config_discovered_in_working_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("protlinks.config.yml"), "format: yaml\n").unwrap();

        cargo_bin_cmd!("protlinks")
            .current_dir(dir.path())
            .args(["network", "-s", "9606", "-g", "TP53"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid format: yaml"));
    }

    #[test]
    fn test_config_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("protlinks.config.yml"),
            "format: tsv\ncolour: blue\n",
        )
        .unwrap();

        cargo_bin_cmd!("protlinks")
            .current_dir(dir.path())
            .args(["string", "-s", "not-a-species", "-g", "TP53"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unknown config field 'colour'").count(1));
    }
}

/// Queries the live BioGRID service; needs `ACCESS_KEY` and network access
#[test]
#[ignore]
fn test_live_biogrid_interactions() {
    let output = cargo_bin_cmd!("protlinks")
        .args([
            "-f",
            "json",
            "biogrid",
            "-g",
            "MAPK10",
            "-g",
            "BRCA1",
            "--search-names",
            "--option",
            "taxId=9606",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(!records.is_empty());
    for record in records {
        let a = record["OFFICIAL_SYMBOL_A"].as_str().unwrap_or_default();
        let b = record["OFFICIAL_SYMBOL_B"].as_str().unwrap_or_default();
        assert!(
            ["MAPK10", "BRCA1"].contains(&a) || ["MAPK10", "BRCA1"].contains(&b),
            "unexpected interaction {} - {}",
            a,
            b
        );
    }
}
