//! Tavily search: client, wire types, and the response-to-views projection.

pub(crate) mod client;
pub(crate) mod digest;
pub(crate) mod types;
