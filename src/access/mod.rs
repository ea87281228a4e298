//! Role-based record scoping.
//!
//! Every list and detail operation narrows what a caller can see before
//! touching storage. The rules live here as pure functions over a
//! [`CallerContext`] so they can be tested without a database: routes
//! build the context once per request, services ask for a
//! [`scope::Visibility`] or a gate decision and translate it into query
//! filters.

pub mod context;
pub mod gate;
pub mod relations;
pub mod scope;

pub use context::CallerContext;
pub use scope::Visibility;
