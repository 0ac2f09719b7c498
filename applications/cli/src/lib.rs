/// Podcastr - home listing and player session from the command line
pub mod config;
pub mod error;
pub mod session;
