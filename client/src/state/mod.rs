//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is a plain mirror of core data, held in an `RwSignal`
//! and provided by the root component so pages and components can read it
//! without prop-drilling.

pub mod auth;
