use std::path::PathBuf;

const DEFAULT_SCRIPT: &str = "response.yaml";

#[derive(Clone, Debug)]
pub struct Config {
    /// YAML script describing the response to render
    pub script_path: PathBuf,
    /// Print only the JSON body instead of the whole HTTP response
    pub body_only: bool,
}

impl Config {
    pub fn load() -> Self {
        let script_path = std::env::var("ENVELOPE_SCRIPT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCRIPT));

        let body_only = std::env::var("ENVELOPE_BODY_ONLY")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);

        Self {
            script_path,
            body_only,
        }
    }
}
