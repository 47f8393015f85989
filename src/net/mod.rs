//! Network layer: typed helpers over the forum's JSON endpoints.

pub mod api;
