use serde_json::Value;

use super::task::describe_value;
use crate::error::{Result, TaskListError};

/// Something that can address a position in a [`TaskList`](super::TaskList).
///
/// Integers resolve when they fall inside `[0, len)`. Text is never coerced
/// into a number: `"2"` is as much a type mismatch as `"NaN"`.
pub trait ListIndex {
    fn resolve(&self, len: usize) -> Result<usize>;
}

fn check(index: i128, len: usize) -> Result<usize> {
    if index >= 0 && index < len as i128 {
        Ok(index as usize)
    } else {
        Err(TaskListError::out_of_range(index, len))
    }
}

macro_rules! integer_index {
    ($($ty:ty),*) => {
        $(
            impl ListIndex for $ty {
                fn resolve(&self, len: usize) -> Result<usize> {
                    check(*self as i128, len)
                }
            }
        )*
    };
}

integer_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ListIndex for str {
    fn resolve(&self, _len: usize) -> Result<usize> {
        Err(TaskListError::not_an_index(format!("string {:?}", self)))
    }
}

impl ListIndex for String {
    fn resolve(&self, len: usize) -> Result<usize> {
        self.as_str().resolve(len)
    }
}

impl ListIndex for Value {
    fn resolve(&self, len: usize) -> Result<usize> {
        match self {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    check(i as i128, len)
                } else if let Some(u) = n.as_u64() {
                    check(u as i128, len)
                } else {
                    Err(TaskListError::not_an_index(describe_value(self)))
                }
            }
            other => Err(TaskListError::not_an_index(describe_value(other))),
        }
    }
}

impl<T: ListIndex + ?Sized> ListIndex for &T {
    fn resolve(&self, len: usize) -> Result<usize> {
        (**self).resolve(len)
    }
}
