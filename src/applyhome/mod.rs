mod client;
mod fetch_error;
mod models;
pub mod query;

pub use client::{ApplyhomeClient, Listing};
#[cfg(test)]
pub use client::{RawResponse, Transport};
pub use fetch_error::FetchError;
pub use query::AnnouncementQuery;
