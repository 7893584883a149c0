use super::ItemId;

/// Failure reported by a [`Surface`](super::Surface) operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("unknown surface item: {0}")]
    UnknownItem(ItemId),
}
