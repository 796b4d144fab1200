//! Array-based binary max-heap.

/// A binary max-heap over a total order on `T`.
///
/// Uses the classic implicit-tree layout with 1-based positions (parent
/// `i/2`, children `2i` and `2i+1`); position `i` lives at vec slot
/// `i − 1`, so no sentinel slot is wasted. Invariant: every node compares
/// greater than or equal to both of its children.
///
/// This is a reusable building block for any strategy needing an online
/// best-k or a priority frontier; it is deliberately not tied to the
/// solution types.
///
/// # Example
///
/// ```
/// use anytime_core::MaxHeap;
///
/// let mut heap = MaxHeap::new();
/// for value in [5, 1, 9, 3] {
///     heap.push(value);
/// }
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The largest element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Inserts an element: append, then bubble up while the parent is
    /// smaller.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.bubble_up(self.items.len());
    }

    /// Removes and returns the largest element: the last element moves to
    /// the root, then bubbles down while a child is larger.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let max = self.items.pop();
        if !self.items.is_empty() {
            self.bubble_down(1);
        }
        max
    }

    fn at(&self, pos: usize) -> &T {
        &self.items[pos - 1]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a - 1, b - 1);
    }

    fn bubble_up(&mut self, mut pos: usize) {
        while pos > 1 && self.at(pos / 2) < self.at(pos) {
            self.swap(pos, pos / 2);
            pos /= 2;
        }
    }

    fn bubble_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = pos * 2;
            let right = pos * 2 + 1;
            let mut largest = pos;
            if left <= len && self.at(left) > self.at(largest) {
                largest = left;
            }
            if right <= len && self.at(right) > self.at(largest) {
                largest = right;
            }
            if largest == pos {
                break;
            }
            self.swap(pos, largest);
            pos = largest;
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_descending_order() {
        let mut heap = MaxHeap::new();
        for value in [5, 1, 9, 3] {
            heap.push(value);
        }
        assert_eq!(heap.len(), 4);
        let drained: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(drained, vec![9, 5, 3, 1]);
        assert!(heap.is_empty());
    }

    #[test]
    fn peek_returns_max_without_removal() {
        let mut heap = MaxHeap::new();
        assert_eq!(heap.peek(), None);
        heap.push(2);
        heap.push(7);
        heap.push(4);
        assert_eq!(heap.peek(), Some(&7));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn handles_duplicates_and_ascending_input() {
        let mut heap = MaxHeap::new();
        for value in [1, 1, 2, 2, 3, 3] {
            heap.push(value);
        }
        let drained: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(drained, vec![3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn single_element_round_trip() {
        let mut heap = MaxHeap::new();
        heap.push(42);
        assert_eq!(heap.pop(), Some(42));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn large_shuffled_input_stays_ordered() {
        // Deterministic pseudo-shuffle; enough to exercise deep bubbling.
        let mut heap = MaxHeap::with_capacity(100);
        for i in 0..100u64 {
            heap.push((i * 37) % 100);
        }
        let drained: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        let expected: Vec<u64> = (0..100).rev().collect();
        assert_eq!(drained, expected);
    }
}
