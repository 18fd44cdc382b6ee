//! Calculate command handler.
//!
//! Implements the `calculate` subcommand: load the domain model, compute
//! metrics for every scheme and export the detailed and summary tables.

use crate::config::AppConfig;
use crate::pipeline::{
    compute_metrics, exit_codes, input_paths, load_model, output_report, prepare_config,
};
use anyhow::Result;
use std::path::Path;

/// Run the calculate command, returning the desired exit code.
///
/// `overrides` holds values given on the command line; they take precedence
/// over the config file. The caller is responsible for calling
/// `std::process::exit()` with the returned code when it is non-zero.
pub fn run_calculate(config_path: Option<&Path>, overrides: &AppConfig) -> Result<i32> {
    let (config, _) = prepare_config(config_path, overrides)?;
    let paths = input_paths(&config)?;

    let model = load_model(&paths)?;
    let table = compute_metrics(&config, &model);

    let exit_code = match output_report(&config.output, &table)? {
        Some(_) => exit_codes::SUCCESS,
        None => exit_codes::NO_DATA,
    };

    if !table.failures.is_empty() {
        tracing::warn!(
            "{} of {} scheme(s) could not be processed",
            table.failures.len(),
            model.schemes.len()
        );
    }

    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_inputs(dir: &Path, scheme_json: &str) {
        fs::write(
            dir.join("entities.json"),
            r#"{"entities": [{"name": "Order", "nanoentities": ["id", "status"]}]}"#,
        )
        .unwrap();
        fs::write(
            dir.join("operations.yaml"),
            "operations:\n  - name: GetOrder\n    database_access:\n      - entity_name: Order\n        read_attributes: [id, status]\n",
        )
        .unwrap();
        fs::create_dir_all(dir.join("schemes")).unwrap();
        fs::write(dir.join("schemes/mono.json"), scheme_json).unwrap();
        fs::write(
            dir.join("msmetrics.yaml"),
            "entities_file: entities.json\noperations_file: operations.yaml\nschemes_dir: schemes\noutput:\n  file: out/metrics.csv\n",
        )
        .unwrap();
    }

    #[test]
    fn test_calculate_writes_reports() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(
            dir.path(),
            r#"{"services": [{"name": "Orders"}], "useCaseResponsibility": {"Orders": ["GetOrder"]}}"#,
        );

        let code = run_calculate(
            Some(&dir.path().join("msmetrics.yaml")),
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        assert!(dir.path().join("out/metrics_detailed.csv").is_file());
        assert!(dir.path().join("out/metrics_summary.csv").is_file());
    }

    #[test]
    fn test_calculate_without_rows_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path(), r#"{"services": []}"#);

        let code = run_calculate(
            Some(&dir.path().join("msmetrics.yaml")),
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(code, exit_codes::NO_DATA);
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_calculate_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_calculate(
            Some(&dir.path().join("absent.yaml")),
            &AppConfig::default(),
        );
        assert!(result.is_err());
    }
}
