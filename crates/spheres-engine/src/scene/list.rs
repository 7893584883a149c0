use core::fmt;

use super::Circle;
use super::rank::{RankAllocator, StackRank};

/// Stable handle to a scene item. Handles are never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A single retained item: handle + stacking rank + primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub id: ItemId,
    pub rank: StackRank,
    pub circle: Circle,
}

/// Retained primitives with deterministic stacking.
///
/// Performance characteristics:
/// - `insert()` is O(1), lookups by handle are O(n)
/// - paint-order iteration reuses an internal index buffer; it is only
///   re-sorted after an insert, removal or raise
///
/// Every item holds a unique [`StackRank`]. New items take the next rank and so
/// land above everything created before them; [`raise`](Self::raise) issues a
/// fresh rank. Raising the item already on top leaves it untouched. If the rank
/// counter runs out, live items are renumbered densely in paint order.
#[derive(Debug, Default)]
pub struct StackList {
    items: Vec<SceneItem>,
    next_id: u64,
    ranks: RankAllocator,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl StackList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts a primitive above every live item and returns its handle.
    pub fn insert(&mut self, circle: Circle) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let rank = self.issue_rank();
        self.items.push(SceneItem { id, rank, circle });

        self.sorted_dirty = true;
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&SceneItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable access to an item's primitive. Stacking is unaffected.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Circle> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .map(|item| &mut item.circle)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Removes an item, returning its primitive if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<Circle> {
        let index = self.index_of(id)?;
        let item = self.items.remove(index);
        self.sorted_dirty = true;
        Some(item.circle)
    }

    /// Moves an item above every other live item.
    ///
    /// Returns `false` if the handle is unknown.
    pub fn raise(&mut self, id: ItemId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.top_rank() == Some(self.items[index].rank) {
            return true;
        }

        let rank = self.issue_rank();
        self.items[index].rank = rank;
        self.sorted_dirty = true;
        true
    }

    /// Rank of the topmost item, `None` when empty.
    pub fn top_rank(&self) -> Option<StackRank> {
        self.items.iter().map(|item| item.rank).max()
    }

    /// Iterates items in paint order (back-to-front) without cloning primitives.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &SceneItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn issue_rank(&mut self) -> StackRank {
        if self.ranks.is_exhausted() {
            self.renumber();
        }
        self.ranks.take()
    }

    /// Reassigns ranks `0..len` in current paint order.
    fn renumber(&mut self) {
        self.rebuild_sorted_indices();
        for (rank, &index) in (0u64..).zip(&self.sorted_indices) {
            self.items[index].rank = StackRank(rank);
        }
        self.ranks.restart_after(self.items.len() as u64);
        log::debug!("stack ranks renumbered for {} items", self.items.len());
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_unstable_by_key(|&i| items[i].rank);

        self.sorted_dirty = false;
    }
}
