//! # dnspod-ddns
//!
//! A dynamic DNS updater for the DNSPod legacy JSON API.
//!
//! Given account credentials and a dotted subdomain, it finds the matching
//! domain and record, then submits a modify request pointing the record at
//! the new IP while preserving the record's other attributes.
//!
//! ## Usage
//!
//! ```bash
//! # Point home.example.com at this machine's address
//! dnspod-ddns user@example.com secret home.example.com
//!
//! # Point it at an explicit address
//! dnspod-ddns user@example.com secret home.example.com --ip 1.2.3.4
//! ```

pub mod client;
pub mod detector;
pub mod error;
pub mod params;
pub mod pending;

pub use client::{Credentials, DnspodClient};
pub use error::{DdnsError, Result};
pub use params::Params;
pub use pending::ApiCall;
