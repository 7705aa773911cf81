// src/util/mod.rs

pub mod date;

pub use date::parse_birth_date;
