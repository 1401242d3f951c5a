// @file: okx_adapter/src/core/mod.rs
// @description: Exports canonical models, seams, and provider-independent logic.
// @author: LAS.

pub mod models;
pub mod interfaces;
pub mod classifier;
pub mod schedule;
