use log::{debug, trace};
use quickcheck::{Arbitrary, Gen};
use serde::{Deserialize, Deserializer, Serialize};

use super::capacity::Capacity;
use super::rotate::Rotate;
use crate::types::{Count, Index};

/// An ordered stack with a fixed capacity.
///
/// Index 0 is the bottom, the last element is the top. Pushing past the
/// capacity evicts from the bottom, so the stack always holds the most
/// recently pushed elements.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct BoundedStack<T> {
    inner: Vec<T>,
    capacity: Capacity,
}

#[derive(Deserialize)]
struct RawStack<T> {
    inner: Vec<T>,
    capacity: Capacity,
}

/// Re-applies the capacity, so a snapshot holding more elements than it
/// allows keeps only its trailing window.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for BoundedStack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawStack::deserialize(deserializer)?;
        let mut stack = BoundedStack {
            inner: raw.inner,
            capacity: raw.capacity,
        };
        stack.evict();
        Ok(stack)
    }
}

impl<T> BoundedStack<T> {
    /// Positive `capacity` is a hard limit, zero accepts nothing and a
    /// negative value never evicts.
    pub fn new(capacity: i64) -> Self {
        Self::with_capacity(Capacity::from(capacity))
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        let inner = match capacity {
            Capacity::Bounded(max) => Vec::with_capacity(max.min(64)),
            _ => Vec::new(),
        };
        BoundedStack { inner, capacity }
    }

    pub fn unbounded() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Drops elements from the bottom until the capacity holds.
    fn evict(&mut self) -> Count {
        let overflow = self.capacity.overflow(self.inner.len());
        if overflow > 0 {
            trace!(
                "evicting {} of {} elements ({:?})",
                overflow,
                self.inner.len(),
                self.capacity
            );
            self.inner.drain(..overflow);
        }
        self.size()
    }

    /// Pushes one element onto the top and returns the new size.
    pub fn push(&mut self, item: T) -> Count {
        if self.capacity == Capacity::Zero {
            return self.size();
        }
        self.inner.push(item);
        self.evict()
    }

    /// Pushes every element in order, then keeps only the trailing window that
    /// fits. Elements pushed by this call may be evicted too when more than
    /// the capacity is pushed at once.
    ///
    /// ```
    /// use bounded_stack::BoundedStack;
    ///
    /// let mut stack = BoundedStack::new(3);
    /// assert_eq!(stack.push_all(vec!["one", "two"]), 2);
    /// assert_eq!(stack.push_all(vec!["three"]), 3);
    /// assert_eq!(stack.push_all(vec!["four"]), 3);
    /// assert_eq!(stack.to_vec(), vec!["two", "three", "four"]);
    /// ```
    pub fn push_all<I>(&mut self, items: I) -> Count
    where
        I: IntoIterator<Item = T>,
    {
        if self.capacity == Capacity::Zero {
            return self.size();
        }
        self.inner.extend(items);
        self.evict()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Removes the bottom element.
    pub fn shift(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.remove(0))
        }
    }

    pub fn top(&self) -> Option<&T> {
        self.inner.last()
    }

    pub fn bottom(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Element at `index` counted from the bottom. A negative index counts
    /// back from the top, so `-1` is the top.
    pub fn at(&self, index: Index) -> Option<&T> {
        let index = if index < 0 {
            self.size() as Index + index
        } else {
            index
        };
        if index < 0 {
            return None;
        }
        self.inner.get(index as usize)
    }

    /// Exchanges the two topmost elements and returns the new top.
    pub fn swap(&mut self) -> Option<&T> {
        self.rotate(Rotate::Right, 2)
    }

    /// Cyclically rotates the top `n` elements and returns the new top.
    ///
    /// With the window `[e1, .., en]` (bottom to top), `Right` yields
    /// `[en, e1, .., en-1]` and `Left` yields `[e2, .., en, e1]`. Elements
    /// below the window stay where they are.
    ///
    /// `n <= 0` rotates the whole stack and `n` larger than the stack is
    /// clamped to its size.
    ///
    /// ```
    /// use bounded_stack::{BoundedStack, Rotate};
    ///
    /// let mut stack = BoundedStack::new(3);
    /// stack.push_all(vec!["one", "two", "three"]);
    /// assert_eq!(stack.rotate(Rotate::Right, 0), Some(&"two"));
    /// assert_eq!(stack.to_vec(), vec!["three", "one", "two"]);
    /// ```
    pub fn rotate(&mut self, direction: Rotate, n: Index) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let size = self.size();
        let n = if n <= 0 {
            size
        } else if n as Count > size {
            debug!("rotate window {} exceeds stack size {}, clamping", n, size);
            size
        } else {
            n as Count
        };
        if n == 1 {
            return self.top();
        }

        let window = &mut self.inner[size - n..];
        match direction {
            Rotate::Right => window.rotate_right(1),
            Rotate::Left => window.rotate_left(1),
        }
        self.top()
    }

    /// Mirrors the whole stack and returns the new top (the old bottom).
    pub fn reverse(&mut self) -> Option<&T> {
        self.inner.reverse();
        self.top()
    }

    pub fn size(&self) -> Count {
        self.inner.len()
    }

    pub fn len(&self) -> Count {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Pushes a copy of the top and returns the new top.
    pub fn dup(&mut self) -> Option<&T> {
        let top = self.top()?.clone();
        self.push(top);
        self.top()
    }

    /// Snapshot of the elements, bottom to top.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.clone()
    }
}

impl<T: Arbitrary> Arbitrary for BoundedStack<T> {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let mut stack = BoundedStack::with_capacity(Capacity::arbitrary(g));
        stack.push_all(Vec::<T>::arbitrary(g));
        stack
    }
}
