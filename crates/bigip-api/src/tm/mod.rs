// iControl REST client modules
//
// `client` holds transport mechanics (URL building, auth headers, error
// envelopes); the remaining files add endpoint groups to `BigIpClient` as
// inherent methods.

pub mod auth;
pub mod client;
pub mod data_groups;
pub mod folders;
pub mod monitors;
pub mod policies;
pub mod virtual_addresses;

pub use client::{BigIpClient, ClientConfig, resource_id};
