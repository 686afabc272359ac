//! FFI crate exposing ScpVault core to the Flutter presentation shell.

pub mod api;
