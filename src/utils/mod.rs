// @file: okx_adapter/src/utils/mod.rs
// @description: Configuration helpers.
// @author: LAS.

pub mod config;
