//! Comedy MCP tool surface: catalog, request schemas, and dispatch.

pub(crate) mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::ComedyService;
