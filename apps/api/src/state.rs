use crate::ats::AtsValidator;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    #[allow(dead_code)]
    pub config: Config,
    /// Validated rule catalog behind an `Arc`; cloning is cheap.
    pub validator: AtsValidator,
}
