//! Cross-subsystem integration flows.

pub mod engine_cycle;
pub mod operator_parity;
pub mod pool_lifecycle;
