use thiserror::Error;

const DEFAULT_TABLE_NAME: &str = "pocAwsLambdaJsStore";
const DEFAULT_TEMPLATE_PATH: &str = "index.html";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Settings read from the function's environment at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub table_name: String,
    pub template_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            template_path: lookup("TEMPLATE_PATH")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_PATH.to_string()),
        }
    }
}
