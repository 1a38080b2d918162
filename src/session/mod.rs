pub mod registry;
pub mod token;

pub use registry::{SessionHandle, SessionRegistry, SESSION_COOKIE};
