//! Styled form primitives built on the core variant tables.

pub mod button;
pub mod checkbox;
pub mod foundation;
pub mod input;

pub use button::{Button, ButtonProps};
pub use checkbox::{Checkbox, CheckboxProps};
pub use foundation::FieldChange;
pub use input::{Input, InputProps};
