//! Drives a stack with random operations and checks it against a plain
//! `VecDeque` that is trimmed after every push.

use std::collections::VecDeque;

use bounded_stack::{stack_interact, BoundedStack, ReturnValue, Rotate, StackOps};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

struct Model {
    deque: VecDeque<u32>,
    capacity: i64,
}

impl Model {
    fn push(&mut self, values: &[u32]) -> usize {
        if self.capacity == 0 {
            return self.deque.len();
        }
        self.deque.extend(values.iter().cloned());
        if self.capacity > 0 {
            while self.deque.len() > self.capacity as usize {
                self.deque.pop_front();
            }
        }
        self.deque.len()
    }

    fn rotate(&mut self, direction: Rotate, n: isize) -> Option<u32> {
        if self.deque.is_empty() {
            return None;
        }
        let len = self.deque.len();
        let n = if n <= 0 || n as usize > len { len } else { n as usize };
        let mut window: Vec<u32> = (0..n).filter_map(|_| self.deque.pop_back()).collect();
        window.reverse();
        match direction {
            Rotate::Right => {
                let top = window.remove(n - 1);
                self.deque.push_back(top);
                self.deque.extend(window);
            }
            Rotate::Left => {
                let bottom = window.remove(0);
                self.deque.extend(window);
                self.deque.push_back(bottom);
            }
        }
        self.deque.back().cloned()
    }

    fn at(&self, index: isize) -> Option<u32> {
        let index = if index < 0 { self.deque.len() as isize + index } else { index };
        if index < 0 {
            None
        } else {
            self.deque.get(index as usize).cloned()
        }
    }
}

fn expect(value: Option<u32>) -> ReturnValue<u32> {
    value.into()
}

fn check(capacity: i64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stack = BoundedStack::new(capacity);
    let mut model = Model {
        deque: VecDeque::new(),
        capacity,
    };

    for step in 0..2_000 {
        let (op, expected) = match rng.gen_range(0..11) {
            0 | 1 => {
                let count = rng.gen_range(0..4);
                let values: Vec<u32> = (0..count).map(|_| rng.gen()).collect();
                let size = model.push(&values);
                (StackOps::Push(SmallVec::from_vec(values)), ReturnValue::IntRes(size))
            }
            2 => (StackOps::Pop(), expect(model.deque.pop_back())),
            3 => (StackOps::Shift(), expect(model.deque.pop_front())),
            4 => {
                let index = rng.gen_range(-6..6);
                (StackOps::At(index), expect(model.at(index)))
            }
            5 => {
                let expected = match model.deque.back().cloned() {
                    Some(top) => {
                        model.push(&[top]);
                        model.deque.back().cloned()
                    }
                    None => None,
                };
                (StackOps::Dup(), expect(expected))
            }
            6 => (StackOps::Swap(), expect(model.rotate(Rotate::Right, 2))),
            7 | 8 => {
                let direction = if rng.gen() { Rotate::Left } else { Rotate::Right };
                let n = rng.gen_range(-1..8);
                (StackOps::Rotate(direction, n), expect(model.rotate(direction, n)))
            }
            9 => {
                model.deque.make_contiguous().reverse();
                (StackOps::Reverse(), expect(model.deque.back().cloned()))
            }
            _ => {
                let snapshot: Vec<u32> = model.deque.iter().cloned().collect();
                (StackOps::ToArray(), ReturnValue::Array(snapshot))
            }
        };

        let name = op.name();
        let actual = stack_interact(op, &mut stack);
        assert_eq!(actual, expected, "step {} ({}) diverged", step, name);
        if capacity > 0 {
            assert!(stack.size() <= capacity as usize);
        }
    }
}

#[test]
fn bounded_matches_model() {
    for seed in 0..8 {
        check(5, seed);
    }
}

#[test]
fn small_bounded_matches_model() {
    for seed in 0..8 {
        check(1, seed);
    }
}

#[test]
fn unbounded_matches_model() {
    for seed in 0..4 {
        check(-1, seed);
    }
}

#[test]
fn zero_capacity_matches_model() {
    check(0, 7);
}
