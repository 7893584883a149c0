use spheres_engine::surface::SurfaceError;

/// Failure raised by environment and object operations.
///
/// Every variant is raised synchronously at the offending call, before any
/// primitive is mutated. Nothing here is transient; callers should not retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnvError {
    #[error("object already exists: {0:?}")]
    DuplicateKey(String),

    #[error("object not found: {0:?}")]
    KeyNotFound(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid color: {0}")]
    InvalidColorSpec(String),

    /// Fill and outline disagree. Color is only ever written to both at once,
    /// so something outside the adapter edited the primitive.
    #[error("inconsistent render state: fill {fill:?} != outline {outline:?}")]
    InconsistentRenderState { fill: String, outline: String },

    /// The primitive carries a color string the surface cannot resolve.
    #[error("surface cannot resolve color {0:?}")]
    UnresolvedColor(String),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl EnvError {
    /// True for broken render invariants. These indicate a bug, not bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EnvError::InconsistentRenderState { .. } | EnvError::UnresolvedColor(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
