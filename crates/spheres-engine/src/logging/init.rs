use std::sync::OnceLock;

use log::LevelFilter;

/// Crates covered by [`LoggingConfig::spheres_level`].
const SPHERES_TARGETS: [&str; 3] = ["spheres_engine", "spheres_env", "spheres_studio"];

/// Logger configuration.
///
/// The base filter is taken from `filter` if set, else from `RUST_LOG`, else
/// it is `level`. `spheres_level` is applied on top of whichever base wins, so
/// a binary can turn up adapter logging without losing the user's filter.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. `"warn,spheres_env=trace"`.
    pub filter: Option<String>,
    pub level: LevelFilter,
    pub spheres_level: Option<LevelFilter>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            level: LevelFilter::Info,
            spheres_level: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with explicit directives, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Overrides the level of the `spheres_*` crates.
    pub fn spheres_level(mut self, level: LevelFilter) -> Self {
        self.spheres_level = Some(level);
        self
    }

    /// Effective directives given the value of `RUST_LOG`.
    fn directives(&self, rust_log: Option<&str>) -> String {
        let rust_log = rust_log.map(str::trim).filter(|s| !s.is_empty());
        let mut directives = match (&self.filter, rust_log) {
            (Some(filter), _) => filter.clone(),
            (None, Some(env)) => env.to_string(),
            (None, None) => self.level.to_string(),
        };

        if let Some(level) = self.spheres_level {
            for target in SPHERES_TARGETS {
                directives.push_str(&format!(",{target}={level}"));
            }
        }
        directives
    }
}

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs the global `env_logger` backend on first call.
///
/// Later calls are ignored. Returns `true` if the logger from the first call is
/// the active one, `false` if another logger was already installed (as test
/// harnesses do).
pub fn init_logging(config: LoggingConfig) -> bool {
    *INSTALLED.get_or_init(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let directives = config.directives(rust_log.as_deref());

        let installed = env_logger::Builder::new()
            .parse_filters(&directives)
            .write_style(config.write_style)
            .try_init()
            .is_ok();

        if installed {
            log::debug!("logging initialized with {directives:?}");
        }
        installed
    })
}
