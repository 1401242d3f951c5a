// @file: okx_adapter/src/tests/mod.rs
// @description: Adapter verification suites running against a fake transport.
// @author: LAS.

mod fake_transport;
mod asset_verifier;
