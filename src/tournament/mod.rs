//! Tournament data source: wire types, retrieval and concurrent collection.

pub mod collect;
pub mod http;
pub mod schedule;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
