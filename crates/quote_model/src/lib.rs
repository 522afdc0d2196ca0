//! Quote Model - Core records for the quote manager
//!
//! This crate holds the data model the export pipeline renders from:
//! quotes with their line items, clients, uploaded templates, and the
//! named counter that hands out sequential quote numbers.
//!
//! The one invariant enforced here is that `total_amount` is derived:
//! it always equals the sum of `quantity * unit_price` over the items
//! and is recomputed by every item mutation.

mod client;
mod counter;
mod error;
mod quote;
mod template;

pub use client::Client;
pub use counter::Counter;
pub use error::ModelError;
pub use quote::{Quote, QuoteItem, QuoteStatus, DEFAULT_VALIDITY_DAYS};
pub use template::Template;
