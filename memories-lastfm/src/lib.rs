//! A barebones client for the Last.fm 2.0 web API.
//!
//! Only the read-only methods needed to walk a listener's history are covered.
//! Libre.fm exposes a compatible API and can be targeted by changing the base URL.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod album;
pub use album::*;

mod artist;
pub use artist::*;

mod user;
pub use user::*;

mod request;

mod de;
