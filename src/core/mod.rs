//! Service facade consumed by presentation layers.

pub mod services;
