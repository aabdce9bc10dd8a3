#[macro_use]
pub mod macros;

use log::trace;

use crate::stack::{BoundedStack, Rotate};
use crate::types::{Count, Index, RVec};

op_variants! {
    StackOps<T>,
    Push(RVec<T>),
    Pop(),
    Shift(),
    Top(),
    Bottom(),
    At(Index),
    Dup(),
    Swap(),
    Rotate(Rotate, Index),
    Reverse(),
    Size(),
    IsEmpty(),
    Clear(),
    ToArray()
}

/// Result of a dispatched operation. `Nil` stands for "no value".
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue<T> {
    Ok,
    Value(T),
    IntRes(Count),
    Bool(bool),
    Array(Vec<T>),
    Nil,
}

impl<T> ReturnValue<T> {
    pub fn is_nil(&self) -> bool {
        matches!(self, ReturnValue::Nil)
    }
}

impl<T> From<Option<T>> for ReturnValue<T> {
    fn from(value: Option<T>) -> ReturnValue<T> {
        value.map(ReturnValue::Value).unwrap_or(ReturnValue::Nil)
    }
}

impl<T> From<Count> for ReturnValue<T> {
    fn from(count: Count) -> ReturnValue<T> {
        ReturnValue::IntRes(count)
    }
}

/// Applies `op` to `stack`, turning every missing value into `Nil`.
pub fn stack_interact<T>(op: StackOps<T>, stack: &mut BoundedStack<T>) -> ReturnValue<T>
where
    T: Clone,
{
    trace!("stack op {}", op.name());
    match op {
        StackOps::Push(values) => stack.push_all(values).into(),
        StackOps::Pop() => stack.pop().into(),
        StackOps::Shift() => stack.shift().into(),
        StackOps::Top() => stack.top().cloned().into(),
        StackOps::Bottom() => stack.bottom().cloned().into(),
        StackOps::At(index) => stack.at(index).cloned().into(),
        StackOps::Dup() => stack.dup().cloned().into(),
        StackOps::Swap() => stack.swap().cloned().into(),
        StackOps::Rotate(direction, n) => stack.rotate(direction, n).cloned().into(),
        StackOps::Reverse() => stack.reverse().cloned().into(),
        StackOps::Size() => stack.size().into(),
        StackOps::IsEmpty() => ReturnValue::Bool(stack.is_empty()),
        StackOps::Clear() => {
            stack.clear();
            ReturnValue::Ok
        }
        StackOps::ToArray() => ReturnValue::Array(stack.to_vec()),
    }
}
