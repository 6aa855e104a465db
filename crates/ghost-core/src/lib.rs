#![deny(warnings)]
pub mod belief;
pub mod error;
pub mod game;
pub mod model;
