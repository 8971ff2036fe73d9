//! Reusable UI components.

pub mod account_card;
pub mod edit_form;
pub mod error_text;
pub mod header;
