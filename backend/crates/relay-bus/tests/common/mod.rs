#![allow(dead_code)]

pub(crate) mod fixtures;

pub use fixtures::*;
