// @file: okx_adapter/src/transport/mod.rs
// @description: Reference transport collaborator (HTTP + cache store).
// @author: LAS.

pub mod cache;
pub mod http;
