use quickcheck::{Arbitrary, Gen};
use serde::{Deserialize, Serialize};

/// Direction of a `rotate`.
///
/// `Right` moves the top of the window to the window's bottom, `Left` moves
/// the window's bottom to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotate {
    Right,
    Left,
}

impl Default for Rotate {
    fn default() -> Self {
        Rotate::Right
    }
}

/// Raw direction codes: `1` is left, anything else falls back to right.
impl From<u8> for Rotate {
    fn from(code: u8) -> Rotate {
        match code {
            1 => Rotate::Left,
            _ => Rotate::Right,
        }
    }
}

impl From<i64> for Rotate {
    fn from(code: i64) -> Rotate {
        match code {
            1 => Rotate::Left,
            _ => Rotate::Right,
        }
    }
}

impl Arbitrary for Rotate {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        if bool::arbitrary(g) {
            Rotate::Left
        } else {
            Rotate::Right
        }
    }
}
