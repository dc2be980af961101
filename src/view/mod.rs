//! Page-state building blocks shared by every screen

mod board;
mod dialog;
mod list;

pub use board::*;
pub use dialog::*;
pub use list::*;

/// `None` admits everything ("All"), `Some(x)` only `x`
pub(crate) fn admits<T: PartialEq>(choice: &Option<T>, value: &T) -> bool {
    choice.as_ref().map_or(true, |wanted| wanted == value)
}
