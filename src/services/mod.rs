//! Service-layer helpers shared by commands that talk to external APIs.

pub mod http;
