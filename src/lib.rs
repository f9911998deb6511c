//! Session controller for a simulated MongoDB admin dashboard.
//!
//! Models the connect → select-database → select-collection → browse/mutate
//! workflow against an in-memory backend with artificial latencies. All
//! presentation is left to consumers: they clone a [`SessionController`],
//! invoke its operations, render [`state::SessionState`] snapshots, and show
//! [`state::SessionEvent`] notifications.

pub mod connection;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod state;

pub use connection::{Backend, LatencyProfile, SampleDataset, SimulatedBackend};
pub use controller::SessionController;
pub use error::{Error, Result};
pub use models::Document;
pub use state::{ConnectionStatus, SessionEvent, SessionState, StatusLevel, StatusMessage};
