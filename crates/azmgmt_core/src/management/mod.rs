//! Windows Azure Management API descriptor kinds.

pub mod affinity_group;
pub mod certificate;
pub mod subscription_operation;
