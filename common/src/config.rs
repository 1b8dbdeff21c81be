/// Host serving the employee list.
pub const DEFAULT_BASE_URL: &str = "https://mocki.io/";

/// Opaque path segment of the hosted mock endpoint.
pub const DEFAULT_ENDPOINT_PATH: &str = "v1/1a44a28a-7c86-4738-8a03-1eafeffe38c8";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Scheme and host of the endpoint, e.g. `https://mocki.io/`.
    pub base_url: String,
    /// Path appended to `base_url`. Never carries a query string.
    pub endpoint_path: String,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers and the banner, 2 prints rows only.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            no_banner: false,
            quiet: 0,
        }
    }
}

impl Config {
    /// Joins `base_url` and `endpoint_path` with exactly one `/` between them.
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint_path.trim_start_matches('/');
        if path.is_empty() {
            return format!("{base}/");
        }
        format!("{base}/{path}")
    }
}
