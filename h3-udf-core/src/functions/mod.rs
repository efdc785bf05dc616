pub(crate) mod args;
pub mod edges;
pub mod hierarchy;
pub mod indexing;
pub mod inspection;
pub mod measurement;
pub mod regions;
pub mod traversal;
