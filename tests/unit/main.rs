//! Unit test suite mirroring the src module tree

mod export;
mod model;
mod segment;
