/// Engine settings applied when building surfaces.
#[derive(Debug, Clone)]
pub struct SurfaceSettings {
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent; `None` keeps the engine default.
    pub user_agent: Option<String>,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}
