use thiserror::Error;

/// Returned by [`BinaryMaxHeap::insert`](crate::BinaryMaxHeap::insert) when
/// every slot is already occupied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("heap is full (capacity {capacity})")]
pub struct CapacityExceeded {
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::CapacityExceeded;

    #[test]
    fn test_display() {
        let err = CapacityExceeded { capacity: 4 };
        assert_eq!("heap is full (capacity 4)", err.to_string());
    }
}
