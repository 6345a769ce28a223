// src/command/inspection_form/mod.rs

pub mod nav;
pub mod ops;
pub mod types;
pub mod validate;

pub use nav::*;
pub use ops::*;
pub use types::*;
pub use validate::*;
