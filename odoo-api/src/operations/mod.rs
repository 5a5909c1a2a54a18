//! Concrete operation implementations, grouped by service

pub mod object;
