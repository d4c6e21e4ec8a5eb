//! Interactive loop
//!
//! Information Hiding:
//! - Line grammar (`Agent: message`, `exit`) private to the parser
//! - Session state machine runs over any async reader/writer pair
//! - Per-turn failures are reported on the session output, never propagated

pub mod parser;
pub mod session;

pub use parser::{parse_line, Input, Turn};
pub use session::{InteractiveSession, SessionSummary};
