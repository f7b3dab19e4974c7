//! Share and receive workflow state machines.

mod receive;
mod share;

pub use receive::{ReceiveSession, ReceiveState, UnlockError};
pub use share::{ShareError, ShareSession, ShareState};
