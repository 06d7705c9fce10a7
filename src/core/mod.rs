// src/core/mod.rs

pub mod csv;
pub mod dates;
pub mod num;
pub mod text;
