/// Fixed-capacity ring buffer that overwrites its oldest element when full.
///
/// Backed by an inline array with head/tail/count indices, so it never
/// allocates. Iteration runs newest-first, which is the order a history list
/// is read in.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    data: [T; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.count >= N
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Push, evicting the oldest element when full. Returns the evicted
    /// element, if any.
    pub fn push_overwrite(&mut self, value: T) -> Option<T> {
        if N == 0 {
            return Some(value);
        }
        let evicted = if self.is_full() {
            let old = self.data[self.tail];
            self.tail = (self.tail + 1) % N;
            self.count -= 1;
            Some(old)
        } else {
            None
        };
        self.data[self.head] = value;
        self.head = (self.head + 1) % N;
        self.count += 1;
        evicted
    }

    /// Most recently pushed element.
    pub fn newest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Oldest element still held.
    pub fn oldest(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(&self.data[self.tail])
    }

    /// Element `age` pushes back from the newest (0 = newest).
    pub fn get(&self, age: usize) -> Option<&T> {
        if age >= self.count {
            return None;
        }
        let idx = (self.head + N - 1 - age) % N;
        Some(&self.data[idx])
    }

    /// Newest-first iterator.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |age| self.get(age))
    }
}
