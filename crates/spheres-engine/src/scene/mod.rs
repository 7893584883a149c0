//! Retained scene types.
//!
//! Responsibilities:
//! - store primitives by stable handle
//! - provide deterministic stacking (creation order, changed only by raise)
//! - keep shape payloads isolated per shape file under `scene::shapes`

mod list;
mod rank;

pub mod shapes;

pub use list::{ItemId, SceneItem, StackList};
pub use rank::StackRank;
pub use shapes::circle::Circle;
