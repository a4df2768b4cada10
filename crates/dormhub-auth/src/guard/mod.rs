//! Render-time gates over the permission resolver.

pub mod access;
pub mod gate;

pub use access::Access;
pub use gate::Guard;
