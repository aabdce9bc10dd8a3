pub mod bounded;
pub mod capacity;
pub mod rotate;

pub use bounded::BoundedStack;
pub use capacity::Capacity;
pub use rotate::Rotate;
