use lacebolla_core::Config;

/// Configuration baked in at build time, `LACEBOLLA_API_URL` overrides the
/// API base url.
pub fn load() -> Config {
    match option_env!("LACEBOLLA_API_URL") {
        Some(url) => Config::default().with_api_base_url(url),
        None => Config::default(),
    }
}
