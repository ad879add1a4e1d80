extern crate self as kasparov_core;

pub mod log;
