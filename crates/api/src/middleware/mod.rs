pub mod session;

pub use session::{session_context, Session};
