//! Fixed-Capacity Sliding Window

/// Fill state of a sliding window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Fewer than `capacity` items have been pushed
    Filling,
    /// Holding exactly `capacity` items; every push evicts the oldest
    Full,
}

/// FIFO window over the most recent `capacity` items.
///
/// Storage is allocated once at construction. Pushing never reallocates:
/// once full, the slot of the oldest item is overwritten in place.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    /// Pre-allocated storage
    storage: Box<[T]>,
    /// Index of the oldest retained item
    head: usize,
    /// Number of retained items
    len: usize,
    /// Total items pushed (for statistics)
    total_pushed: u64,
}

impl<T: Copy + Default> SlidingWindow<T> {
    /// Create a new window with the given capacity.
    ///
    /// Returns `None` for a zero capacity.
    pub fn new(capacity: usize) -> Option<Self> {
        if capacity == 0 {
            return None;
        }
        Some(Self {
            storage: vec![T::default(); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
            total_pushed: 0,
        })
    }

    /// Push an item, evicting the oldest one if the window is full
    pub fn push(&mut self, item: T) {
        let capacity = self.storage.len();
        if self.len < capacity {
            let tail = (self.head + self.len) % capacity;
            self.storage[tail] = item;
            self.len += 1;
        } else {
            self.storage[self.head] = item;
            self.head = (self.head + 1) % capacity;
        }
        self.total_pushed += 1;
    }

    /// Item at logical position `index` (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.storage[(self.head + index) % self.storage.len()])
    }

    /// Most recently pushed item
    pub fn latest(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            window: self,
            front: 0,
            back: self.len,
        }
    }

    /// Copy the contents out in arrival order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    /// Number of retained items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if window is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if window is full
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// Current fill state
    pub fn state(&self) -> WindowState {
        if self.is_full() {
            WindowState::Full
        } else {
            WindowState::Filling
        }
    }

    /// Get the window capacity
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.len as f64 / self.storage.len() as f64
    }

    /// Get total items pushed since construction
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }
}

/// Oldest-to-newest iterator over a [`SlidingWindow`]
pub struct Iter<'a, T> {
    window: &'a SlidingWindow<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let capacity = self.window.storage.len();
        let item = &self.window.storage[(self.window.head + self.front) % capacity];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let capacity = self.window.storage.len();
        Some(&self.window.storage[(self.window.head + self.back) % capacity])
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Copy + Default> IntoIterator for &'a SlidingWindow<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(SlidingWindow::<u32>::new(0).is_none());
    }

    #[test]
    fn test_push_and_read() {
        let mut window = SlidingWindow::new(10).unwrap();

        for i in 0..5u32 {
            window.push(i * 100);
        }

        assert_eq!(window.len(), 5);
        assert_eq!(window.state(), WindowState::Filling);
        assert_eq!(window.to_vec(), vec![0, 100, 200, 300, 400]);
        assert_eq!(window.latest(), Some(&400));
        assert_eq!(window.get(5), None);
    }

    #[test]
    fn test_full_exactly_at_capacity() {
        let mut window = SlidingWindow::new(4).unwrap();
        for i in 0..3u32 {
            window.push(i);
            assert_eq!(window.state(), WindowState::Filling);
        }
        window.push(3);
        assert_eq!(window.state(), WindowState::Full);
        assert_eq!(window.len(), 4);
    }

    #[test]
    fn test_overwrite_oldest() {
        let mut window = SlidingWindow::new(5).unwrap();

        for i in 0..12u32 {
            window.push(i);
        }

        assert_eq!(window.len(), 5);
        assert!(window.is_full());
        assert_eq!(window.to_vec(), vec![7, 8, 9, 10, 11]);
        assert_eq!(window.total_pushed(), 12);
    }

    #[test]
    fn test_reverse_iteration() {
        let mut window = SlidingWindow::new(3).unwrap();
        for i in 0..5u32 {
            window.push(i);
        }
        let newest_first: Vec<u32> = window.iter().rev().copied().collect();
        assert_eq!(newest_first, vec![4, 3, 2]);
    }

    #[test]
    fn test_fill_ratio() {
        let mut window = SlidingWindow::new(100).unwrap();
        assert_eq!(window.fill_ratio(), 0.0);

        for _ in 0..50 {
            window.push(0u8);
        }

        assert!((window.fill_ratio() - 0.5).abs() < 0.01);
    }

    proptest! {
        #[test]
        fn prop_holds_last_capacity_items(capacity in 1usize..64, pushes in 0usize..256) {
            let mut window = SlidingWindow::new(capacity).unwrap();
            for i in 0..pushes {
                window.push(i);
            }

            let expected: Vec<usize> = (pushes.saturating_sub(capacity)..pushes).collect();
            prop_assert_eq!(window.len(), pushes.min(capacity));
            prop_assert_eq!(window.to_vec(), expected);
            prop_assert_eq!(window.is_full(), pushes >= capacity);
        }
    }
}
