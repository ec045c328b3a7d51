// src/core/mod.rs

pub mod document;
pub mod decode;

pub use document::{PathSpec, Seg};
