// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;

pub mod columns;
pub mod error;
pub mod export;
pub mod facets;
pub mod fetch;
pub mod session;
pub mod table;
pub mod view;
