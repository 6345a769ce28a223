// src/command/mod.rs

pub mod inspection_form;
