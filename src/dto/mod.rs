//! Response shapes serialized by the JSON API.

pub mod api;
