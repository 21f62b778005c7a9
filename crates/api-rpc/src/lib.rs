//! JSON-RPC API Layer
//!
//! Exposes the recipe queue operations as versioned JSON-RPC 2.0 methods.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use handler::RpcHandler;
pub use server::{RpcServer, RpcServerConfig};
