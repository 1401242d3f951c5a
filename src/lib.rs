// @file: okx_adapter/src/lib.rs
// @description: Exposes the adapter, its seams and the reference transport for the runner and tests.
// @author: LAS.


pub mod core;
pub mod connectors;
pub mod error;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;
