//! Windows Azure Diagnostics configuration kinds.

pub mod performance_counter;
