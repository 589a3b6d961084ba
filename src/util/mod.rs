#![allow(dead_code)]

pub mod alloc;
pub mod option;
pub mod panic;
pub mod result;
