//! A bounded, comparator-driven binary heap.
//!
//! One heap implementation covers both "smallest n" and "largest n"
//! selection: the comparator passed in already encodes the selection
//! direction, and the heap keeps the worst-ranked retained element at the
//! root so it can be evicted in O(log n) when a better candidate arrives.

use std::cmp::Ordering;

/// The retained candidates for a bounded selection.
///
/// Heap order: the root is the element ranking last among those kept,
/// i.e. the next to be evicted. `compare` returning `Ordering::Less`
/// means "ranks ahead in the selection".
pub(crate) struct BoundedHeap<T, C> {
    items: Vec<T>,
    compare: C,
}

impl<T, C> BoundedHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Heapifies `seed` in place. O(seed.len()).
    pub(crate) fn from_seed(seed: Vec<T>, compare: C) -> Self {
        let mut heap = Self {
            items: seed,
            compare,
        };
        for index in (0..heap.items.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// Considers one candidate: if it ranks strictly ahead of the current
    /// root, the root is evicted and the candidate sifted into place;
    /// otherwise the candidate is discarded. Ties keep the incumbent.
    pub(crate) fn offer(&mut self, candidate: T) {
        if (self.compare)(&candidate, &self.items[0]) == Ordering::Less {
            self.items[0] = candidate;
            self.sift_down(0);
        }
    }

    /// The retained elements, in heap order (not sorted).
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut worst = index;

            if left < self.items.len()
                && (self.compare)(&self.items[left], &self.items[worst]) == Ordering::Greater
            {
                worst = left;
            }
            if right < self.items.len()
                && (self.compare)(&self.items[right], &self.items[worst]) == Ordering::Greater
            {
                worst = right;
            }
            if worst == index {
                return;
            }

            self.items.swap(index, worst);
            index = worst;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(left: &i32, right: &i32) -> Ordering {
        left.cmp(right)
    }

    fn is_heap(items: &[i32]) -> bool {
        (1..items.len()).all(|child| items[(child - 1) / 2] >= items[child])
    }

    #[test]
    fn test_from_seed_establishes_heap_order() {
        let heap = BoundedHeap::from_seed(vec![1, 9, 3, 7, 5], ascending);
        let items = heap.into_vec();
        assert!(is_heap(&items));
        assert_eq!(items[0], 9);
    }

    #[test]
    fn test_offer_evicts_the_root() {
        let mut heap = BoundedHeap::from_seed(vec![4, 8, 6], ascending);
        heap.offer(1);
        let items = heap.into_vec();
        assert!(is_heap(&items));
        assert!(!items.contains(&8));
        assert!(items.contains(&1));
    }

    #[test]
    fn test_offer_discards_worse_candidates() {
        let mut heap = BoundedHeap::from_seed(vec![4, 8, 6], ascending);
        heap.offer(9);
        let mut items = heap.into_vec();
        items.sort_unstable();
        assert_eq!(items, vec![4, 6, 8]);
    }

    #[test]
    fn test_offer_tie_keeps_incumbent() {
        let mut heap = BoundedHeap::from_seed(vec![3], ascending);
        heap.offer(3);
        assert_eq!(heap.into_vec(), vec![3]);
    }

    #[test]
    fn test_selection_matches_sort_prefix() {
        let values = vec![12, 3, 44, 7, 9, 1, 30, 5];
        let (seed, rest) = values.split_at(3);
        let mut heap = BoundedHeap::from_seed(seed.to_vec(), ascending);
        for value in rest {
            heap.offer(*value);
        }

        let mut kept = heap.into_vec();
        kept.sort_unstable();
        assert_eq!(kept, vec![1, 3, 5]);
    }
}
