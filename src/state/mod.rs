// Session state management

pub mod events;
pub mod session;
pub mod status;

pub use events::SessionEvent;
pub use session::{ConnectionStatus, SessionState};
pub use status::{StatusLevel, StatusMessage};
