// src/application/ports/mod.rs
pub mod time;

pub type ClockPort = dyn time::Clock;
