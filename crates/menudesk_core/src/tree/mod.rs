//! In-memory tree views over stored menu rows.

pub mod assembly;
