//! A capacity-limited stack with Forth-style reordering primitives.
//!
//! ```
//! use bounded_stack::{BoundedStack, Rotate};
//!
//! let mut stack = BoundedStack::new(3);
//! stack.push_all(vec!["one", "two", "three"]);
//! assert_eq!(stack.swap(), Some(&"two"));
//! assert_eq!(stack.to_vec(), vec!["one", "three", "two"]);
//!
//! stack.push("four");
//! assert_eq!(stack.to_vec(), vec!["three", "two", "four"]);
//! assert_eq!(stack.rotate(Rotate::Left, 0), Some(&"three"));
//! ```

#[macro_use]
pub mod ops;
pub mod stack;
pub mod types;

pub use ops::{stack_interact, ReturnValue, StackOps};
pub use stack::{BoundedStack, Capacity, Rotate};
pub use types::{Count, Index, RVec};
