use super::{HandlerSet, Node, ALL_METHODS};

use std::sync::Arc;

use smallvec::SmallVec;

pub(super) type HandlerSets<'a, T> = SmallVec<[&'a HandlerSet<T>; 8]>;

impl<T> Node<T> {
    /// Indices into `handlers` of the sets on this node that serve `method`,
    /// memoized per `(method, wildcard)`.
    ///
    /// Nodes never change once routing starts, so entries are never
    /// invalidated. Two racing computations publish the same slice.
    fn handler_slots(&self, method: &str, wildcard: bool) -> Arc<[usize]> {
        let idx = usize::from(wildcard);

        let cached = self.cache.get(method).and_then(|e| e[idx].clone());
        if let Some(slots) = cached {
            return slots;
        }

        let slots: Arc<[usize]> = self
            .methods
            .iter()
            .filter_map(|m| m.get(method).or_else(|| m.get(ALL_METHODS)))
            .copied()
            .collect();

        let mut entry = self.cache.entry(method.into()).or_default();
        entry[idx].get_or_insert(slots).clone()
    }

    /// Appends the handler sets on this node that serve `method`.
    ///
    /// A node can be reached twice in one segment, through its literal key
    /// and through the pattern edge spelled the same way (`GET /:id` against
    /// route `/:id`); its sets are only collected once.
    pub(super) fn collect_handlers<'a>(
        &'a self,
        method: &str,
        wildcard: bool,
        out: &mut HandlerSets<'a, T>,
    ) {
        if self.handlers.is_empty() {
            return;
        }
        let slots = self.handler_slots(method, wildcard);
        let first = match slots.first().and_then(|&i| self.handlers.get(i)) {
            Some(s) => s,
            None => return,
        };
        // a node's sets for one method always go in together
        if out.iter().any(|&s| std::ptr::eq(s, first)) {
            return;
        }
        out.extend(slots.iter().filter_map(|&i| self.handlers.get(i)));
    }
}
