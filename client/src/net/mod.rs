//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core crate defines the authentication boundary and its wire format;
//! this module only moves bytes with `fetch`.

pub mod gateway;
