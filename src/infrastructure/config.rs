use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Default destination when the CLI gets no output path
    pub output_path: String,
    /// Header of the column that receives normalized call numbers
    pub normalized_column: String,
    /// Largest list accepted by the sort endpoint
    pub max_sort_batch: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
            output_path: env::var("OUTPUT_PATH")
                .unwrap_or_else(|_| "sorted_output.csv".to_string()),
            normalized_column: env::var("NORMALIZED_COLUMN")
                .unwrap_or_else(|_| "normalized".to_string()),
            max_sort_batch: env::var("MAX_SORT_BATCH")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10_000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            cors_allowed_origins: Vec::new(),
            output_path: "sorted_output.csv".to_string(),
            normalized_column: "normalized".to_string(),
            max_sort_batch: 10_000,
        }
    }
}
