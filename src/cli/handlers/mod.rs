//! Command handlers

pub mod send;

pub use send::SendHandler;
