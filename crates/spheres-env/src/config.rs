use spheres_engine::surface::CanvasConfig;

/// Environment configuration.
///
/// Builder-style; defaults to a 600x600 black surface.
///
/// ```rust
/// use spheres_env::EnvironmentConfig;
///
/// let config = EnvironmentConfig::new().size(800, 600).background("#101010");
/// assert_eq!(config.width, 800);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            background: "black".to_string(),
        }
    }
}

impl EnvironmentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Background color string.
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    pub(crate) fn canvas_config(&self) -> CanvasConfig {
        CanvasConfig {
            width: self.width,
            height: self.height,
            background: self.background.clone(),
        }
    }
}
