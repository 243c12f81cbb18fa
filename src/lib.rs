//! showcoords
pub mod core;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod poller;
#[cfg(test)]
mod tests;
pub mod ui;
