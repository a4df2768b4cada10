//! # dormhub-entity
//!
//! Domain models for the DormHub client. Every struct in this crate mirrors
//! a JSON document exchanged with the backend REST API. All entities derive
//! `Debug`, `Clone`, `Serialize` and `Deserialize`, and use the backend's
//! camelCase field names on the wire.

pub mod account;
pub mod archive;
pub mod notification;
pub mod payment;
pub mod permission;
pub mod room;
pub mod tenant;
