// src/checklist/mod.rs

pub mod catalog;
pub mod select;

pub use catalog::*;
pub use select::*;
