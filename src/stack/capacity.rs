use quickcheck::{Arbitrary, Gen};
use serde::{Deserialize, Serialize};

use crate::types::Count;

/// Upper bound on the number of elements a `BoundedStack` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capacity {
    /// Never evicts.
    Unbounded,
    /// Accepts nothing, every push is dropped.
    Zero,
    /// Keeps at most this many elements, evicting from the bottom.
    Bounded(Count),
}

impl Capacity {
    /// Number of elements to drop from the bottom of a sequence of `len`
    /// elements so that it fits.
    pub fn overflow(&self, len: Count) -> Count {
        match *self {
            Capacity::Unbounded => 0,
            Capacity::Zero => len,
            Capacity::Bounded(max) => len.saturating_sub(max),
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Unbounded
    }
}

/// Signed form: positive is a hard limit, zero accepts nothing, negative is
/// unlimited.
impl From<i64> for Capacity {
    fn from(capacity: i64) -> Capacity {
        match capacity {
            0 => Capacity::Zero,
            n if n < 0 => Capacity::Unbounded,
            n => Capacity::Bounded(n as Count),
        }
    }
}

impl From<Count> for Capacity {
    fn from(capacity: Count) -> Capacity {
        if capacity == 0 {
            Capacity::Zero
        } else {
            Capacity::Bounded(capacity)
        }
    }
}

impl Arbitrary for Capacity {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => Capacity::Unbounded,
            1 => Capacity::Zero,
            _ => Capacity::Bounded(1 + (u8::arbitrary(g) % 16) as Count),
        }
    }
}
