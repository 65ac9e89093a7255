//! Beaconsmith library components
//!
//! This library exposes core components of Beaconsmith for testing and integration purposes.

pub mod capture;
pub mod interface;
pub mod mutate;
pub mod rawsocks;
pub mod tx;
