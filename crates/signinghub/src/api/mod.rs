//! Endpoint wrappers.
//!
//! Each wrapper shapes one request and hands it to [`Session::request`],
//! so every result goes through the same dispatcher.
//!
//! [`Session::request`]: crate::Session::request

pub(crate) mod endpoints;

mod documents;
mod packages;
mod settings;
mod workflow;
