/// Position of an item in the stacking order.
///
/// Ranks are unique among live items; higher ranks paint later (on top).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct StackRank(pub u64);

/// Hands out increasing ranks until the counter is exhausted.
#[derive(Debug, Default)]
pub(crate) struct RankAllocator {
    next: u64,
}

impl RankAllocator {
    #[cfg(test)]
    pub(crate) const fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// True once no further rank can be issued without renumbering.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.next == u64::MAX
    }

    #[inline]
    pub(crate) fn take(&mut self) -> StackRank {
        let rank = StackRank(self.next);
        self.next = self.next.saturating_add(1);
        rank
    }

    /// Restarts issuing after `count` densely renumbered ranks.
    #[inline]
    pub(crate) fn restart_after(&mut self, count: u64) {
        self.next = count;
    }
}
