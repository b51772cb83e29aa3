use crate::error::HeapError;
use tracing::{debug, warn};

/// Max-heap where every node has `2^exponent` children, stored in level order.
#[derive(Clone, Debug)]
pub struct PowerHeap<T: Ord> {
    exponent: u32,
    branching_factor: usize,
    data: Vec<T>,
}

pub type MinPowerHeap<T> = PowerHeap<std::cmp::Reverse<T>>;

/// Settings used to construct a [`PowerHeap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    pub exponent: i32,
    pub capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            exponent: 1,
            capacity: 0,
        }
    }
}

impl HeapConfig {
    #[inline]
    pub fn build<T: Ord>(&self) -> Result<PowerHeap<T>, HeapError> {
        PowerHeap::with_capacity(self.exponent, self.capacity)
    }
}

fn branching_factor(exponent: i32) -> Result<(u32, usize), HeapError> {
    let reject = |reason: &'static str| {
        warn!(exponent, reason, "rejected heap configuration");
        HeapError::InvalidConfiguration {
            exponent: exponent.into(),
            reason,
        }
    };

    let exponent = u32::try_from(exponent).map_err(|_| reject("exponent must be non-negative"))?;
    let factor = num::checked_pow(2usize, exponent as usize)
        .ok_or_else(|| reject("branching factor overflows usize"))?;

    Ok((exponent, factor))
}

impl<T: Ord> PowerHeap<T> {
    /// Fails with [`HeapError::InvalidConfiguration`] if `exponent` is negative
    /// or `2^exponent` does not fit in a `usize`. Nothing is allocated on failure.
    ///
    /// O(1)
    #[inline]
    pub fn new(exponent: i32) -> Result<Self, HeapError> {
        Self::with_capacity(exponent, 0)
    }

    /// O(1)
    pub fn with_capacity(exponent: i32, capacity: usize) -> Result<Self, HeapError> {
        let (exponent, branching_factor) = branching_factor(exponent)?;
        debug!(exponent, branching_factor, capacity, "created power heap");

        Ok(Self {
            exponent,
            branching_factor,
            data: Vec::with_capacity(capacity),
        })
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn branching_factor(&self) -> usize {
        self.branching_factor
    }

    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The backing storage in level order. Not sorted.
    ///
    /// O(1)
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// O(log n)
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.len() - 1);
    }

    /// Removes the greatest element, or returns `None` if the heap is empty.
    ///
    /// O(b log_b n) where b is the branching factor.
    pub fn pop(&mut self) -> Option<T> {
        use std::mem;

        let mut res = self.data.pop()?;
        if let Some(root) = self.data.first_mut() {
            res = mem::replace(root, res);
            self.sift_down(0);
        }

        Some(res)
    }

    #[inline]
    fn parent(&self, node: usize) -> usize {
        (node - 1) / self.branching_factor
    }

    /// O(log_b n)
    fn sift_up(&mut self, mut node: usize) {
        while node != 0 {
            let parent = self.parent(node);

            if self.data[parent] < self.data[node] {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(b log_b n)
    fn sift_down(&mut self, mut node: usize) {
        let len = self.len();

        loop {
            // Out of range also means no children; only reachable with huge factors.
            let first = match node
                .checked_mul(self.branching_factor)
                .and_then(|i| i.checked_add(1))
            {
                Some(first) if first < len => first,
                _ => break,
            };
            let end = first.saturating_add(self.branching_factor).min(len);

            // Strict comparison so the leftmost of several equal children wins.
            let mut largest = node;
            for child in first..end {
                if self.data[largest] < self.data[child] {
                    largest = child;
                }
            }

            if largest == node {
                break;
            }
            self.data.swap(node, largest);
            node = largest;
        }
    }
}

impl<T: Ord> Default for PowerHeap<T> {
    /// A binary heap.
    fn default() -> Self {
        Self {
            exponent: 1,
            branching_factor: 2,
            data: Vec::new(),
        }
    }
}

impl<T: Ord> Extend<T> for PowerHeap<T> {
    /// Pushes one element at a time. O(n log_b n)
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for x in iter {
            self.push(x);
        }
    }
}
