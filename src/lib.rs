//! # argent
//!
//! Session and authentication core for the Argent Bank client.
//!
//! Login and logout run as an async, fallible state machine over a pluggable
//! [`gateway::AuthGateway`]. The resulting credential is persisted to one of
//! two storage backends picked by "remember me", restored at startup, and
//! consulted by the access guard before protected views render.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | `Session`, `AuthEvent`, and the pure transition reducer |
//! | [`store`] | Observable session container (single writer) |
//! | [`pipeline`] | `login`/`logout`/profile actions wrapping the gateway |
//! | [`persistence`] | Credential and profile persistence, rehydration precedence |
//! | [`storage`] | Key-value backends (memory, JSON file) |
//! | [`profile`] | Profile type and its observable cache |
//! | [`gateway`] | Network boundary trait, wire format, reqwest client |
//! | [`guard`] | Allow/redirect decisions for protected views |
//! | [`forms`] | Sign-in and edit-name input checks |
//! | [`config`] | Environment-driven configuration |

pub mod config;
pub mod forms;
pub mod gateway;
pub mod guard;
pub mod persistence;
pub mod pipeline;
pub mod profile;
pub mod session;
pub mod storage;
pub mod store;
