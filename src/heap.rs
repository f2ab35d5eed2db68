use std::ops::Index;
use std::slice;

use crate::error::CapacityExceeded;
use crate::record::Record;

/// Capacity used by [`BinaryMaxHeap::default`].
pub const DEFAULT_CAPACITY: usize = 1023;

/// A bounded max-priority queue stored as an implicit binary tree.
///
/// Positions are 1-based: the root sits at position 1 and the node at
/// position `i` has its parent at `i / 2` and its children at `2i` and
/// `2i + 1`. Heaps built with [`from_array`](Self::from_array) keep the
/// caller's slot 0 as an untouched sentinel, so positions map directly onto
/// the caller's indices.
///
/// Records with equal priorities come out in no particular order.
///
/// # Examples
///
/// ```
/// use bounded_max_heap::BinaryMaxHeap;
///
/// let mut heap = BinaryMaxHeap::with_capacity(3);
/// heap.insert(2, "two").unwrap();
/// heap.insert(7, "seven").unwrap();
/// heap.insert(4, "four").unwrap();
/// assert!(heap.insert(1, "one").is_err());
///
/// assert_eq!(heap.extract_max(), Some("seven"));
/// assert_eq!(heap.extract_max(), Some("four"));
/// assert_eq!(heap.extract_max(), Some("two"));
/// assert_eq!(heap.extract_max(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryMaxHeap<P, T> {
    data: Vec<Record<P, T>>,
    // index in `data` of position 1
    origin: usize,
    capacity: usize,
    count: usize,
}

impl<P, T> BinaryMaxHeap<P, T>
where
    P: PartialOrd,
{
    /// Creates an empty heap that holds at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            origin: 0,
            capacity,
            count: 0,
        }
    }

    /// Takes ownership of a 1-indexed vector and heap-orders it in place.
    ///
    /// `data[0]` is a sentinel: it is never read, moved or compared. The
    /// resulting heap is full, with `capacity == count == data.len() - 1`.
    pub fn from_array(data: Vec<Record<P, T>>) -> Self {
        let count = data.len().saturating_sub(1);
        let origin = if data.is_empty() { 0 } else { 1 };
        let mut heap = Self {
            data,
            origin,
            capacity: count,
            count,
        };
        heap.build();
        heap
    }

    /// Sorts a 1-indexed vector ascending by priority and hands the same
    /// storage back. `data[0]` stays where it was.
    pub fn heapsort(data: Vec<Record<P, T>>) -> Vec<Record<P, T>> {
        Self::from_array(data).sort().into_storage()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }

    /// Returns the record with the greatest priority without removing it.
    pub fn peek(&self) -> Option<&Record<P, T>> {
        if self.is_empty() {
            return None;
        }
        self.data.get(self.slot(1))
    }

    /// Adds a record, failing if the heap already holds `capacity` records.
    pub fn insert(&mut self, priority: P, element: T) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            log::debug!(
                "rejecting insert: {} of {} slots in use",
                self.count,
                self.capacity
            );
            return Err(CapacityExceeded {
                capacity: self.capacity,
            });
        }
        debug_assert_eq!(self.data.len(), self.origin + self.count);
        self.data.push(Record::new(priority, element));
        self.count += 1;
        self.float_up(self.count);
        Ok(())
    }

    /// Removes the greatest-priority element, or returns `None` when empty.
    pub fn extract_max(&mut self) -> Option<T> {
        self.extract_max_record().map(Record::into_element)
    }

    /// Like [`extract_max`](Self::extract_max) but keeps the priority.
    pub fn extract_max_record(&mut self) -> Option<Record<P, T>> {
        if self.is_empty() {
            return None;
        }
        debug_assert_eq!(self.data.len(), self.origin + self.count);
        self.swap(1, self.count);
        self.count -= 1;
        let max = self.data.pop();
        self.sink_down(1);
        max
    }

    /// Consumes the heap and sorts its storage ascending by priority.
    ///
    /// The largest live record is repeatedly swapped behind the shrinking
    /// heap prefix, so no records are moved out of the backing vector.
    pub fn sort(mut self) -> Sorted<P, T> {
        let len = self.count;
        log::trace!("sorting {} records", len);
        while self.count > 0 {
            self.swap(1, self.count);
            self.count -= 1;
            self.sink_down(1);
        }
        Sorted {
            data: self.data,
            origin: self.origin,
            len,
        }
    }

    fn build(&mut self) {
        log::trace!("building heap over {} records", self.count);
        for pos in (1..=self.count / 2).rev() {
            self.sink_down(pos);
        }
    }

    fn float_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.priority(parent) < self.priority(pos) {
                self.swap(parent, pos);
                pos = parent;
            } else {
                return;
            }
        }
    }

    // Left wins when both children tie.
    fn sink_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos;
            let right = left + 1;
            let mut largest = pos;
            if left <= self.count && self.priority(left) > self.priority(largest) {
                largest = left;
            }
            if right <= self.count && self.priority(right) > self.priority(largest) {
                largest = right;
            }
            if largest == pos {
                return;
            }
            self.swap(pos, largest);
            pos = largest;
        }
    }

    fn slot(&self, pos: usize) -> usize {
        debug_assert!(pos >= 1 && pos <= self.count);
        self.origin + pos - 1
    }

    fn priority(&self, pos: usize) -> &P {
        &self.data[self.slot(pos)].priority
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = (self.slot(a), self.slot(b));
        self.data.swap(a, b);
    }
}

impl<P, T> Default for BinaryMaxHeap<P, T>
where
    P: PartialOrd,
{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Sorts a 1-indexed vector ascending by priority, leaving `data[0]` alone.
///
/// ```
/// use bounded_max_heap::{heapsort, Record};
///
/// let data = vec![
///     Record::new(0, ' '),
///     Record::new(3, 'c'),
///     Record::new(1, 'a'),
///     Record::new(2, 'b'),
/// ];
/// let sorted: String = heapsort(data)[1..].iter().map(|r| r.element).collect();
/// assert_eq!(sorted, "abc");
/// ```
pub fn heapsort<P: PartialOrd, T>(data: Vec<Record<P, T>>) -> Vec<Record<P, T>> {
    BinaryMaxHeap::heapsort(data)
}

/// The storage of a sorted heap, indexed from 1 in ascending priority order.
#[derive(Debug, Clone)]
pub struct Sorted<P, T> {
    data: Vec<Record<P, T>>,
    origin: usize,
    len: usize,
}

impl<P, T> Sorted<P, T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the record at 1-based position `pos`.
    pub fn get(&self, pos: usize) -> Option<&Record<P, T>> {
        if pos == 0 || pos > self.len {
            return None;
        }
        self.data.get(self.origin + pos - 1)
    }

    pub fn as_slice(&self) -> &[Record<P, T>] {
        &self.data[self.origin..self.origin + self.len]
    }

    pub fn iter(&self) -> slice::Iter<'_, Record<P, T>> {
        self.as_slice().iter()
    }

    /// Returns the backing vector, including the sentinel slot of heaps
    /// built with [`BinaryMaxHeap::from_array`].
    pub fn into_storage(self) -> Vec<Record<P, T>> {
        self.data
    }
}

impl<P, T> Index<usize> for Sorted<P, T> {
    type Output = Record<P, T>;

    fn index(&self, pos: usize) -> &Self::Output {
        match self.get(pos) {
            Some(record) => record,
            None => panic!("position {} out of range 1..={}", pos, self.len),
        }
    }
}

impl<'a, P, T> IntoIterator for &'a Sorted<P, T> {
    type Item = &'a Record<P, T>;
    type IntoIter = slice::Iter<'a, Record<P, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
