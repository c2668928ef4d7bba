//! PIM-side data model for PimBridge.
//!
//! Defines the types the bridge exchanges with the host PIM framework:
//! - [`Collection`] / [`Item`] — projections of engine state into the
//!   host's two-level hierarchy
//! - [`Rights`] — what the host may do with a collection
//! - [`PimHost`] / [`PayloadFetcher`] — the seam to the host framework
//!
//! The bridge never interprets item payloads; they stay opaque blobs
//! (iCalendar, vCard) all the way through.

mod collection;
mod host;
mod item;

pub use collection::{Collection, Rights, DIRECTORY_CONTENT_TYPE};
pub use host::{mock, FetchError, PayloadFetcher, PimHost, Status};
pub use item::Item;
