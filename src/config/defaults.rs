//! Default values for msmetrics configuration.

/// Config file names searched in each candidate directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "msmetrics.yaml",
    ".msmetrics.yaml",
    "msmetrics.yml",
    "config.yaml",
];

/// Directory under the user config dir holding a global config.
pub const CONFIG_DIR_NAME: &str = "msmetrics";

/// File name written by `config init`.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "msmetrics.yaml";

/// Type assumed for operations that `op_type_map` does not mention.
pub const DEFAULT_OPERATION_TYPE: &str = "Read";

/// Output path suggested in the example config.
pub const DEFAULT_OUTPUT_FILE: &str = "results/microservices_metrics.csv";

/// Keys a config must set before a calculation can run.
pub const REQUIRED_KEYS: &[&str] = &["entities_file", "operations_file", "schemes_dir"];
