/// Connection credentials for the hosted content backend, baked in at
/// compile time the same way the bundler injected them for the original
/// deployment.
#[derive(Debug, Clone, Copy)]
pub struct BackendConfig {
    pub base_url: &'static str,
    pub api_key: &'static str,
}

pub fn backend() -> BackendConfig {
    BackendConfig {
        base_url: option_env!("PORTFOLIO_BACKEND_URL").unwrap_or("http://localhost:54321"),
        api_key: option_env!("PORTFOLIO_BACKEND_KEY").unwrap_or(""),
    }
}
