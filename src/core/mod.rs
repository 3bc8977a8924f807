// Core business logic
// The accumulator and its validated mutations

pub mod accumulator;

pub use accumulator::Accumulator;
