mod client;
mod engine;
mod error;
mod types;

pub use client::{DEFAULT_API_BASE, DEFAULT_USER_AGENT, ProfileClient};
pub use engine::{Engine, Session};
pub use error::{CoreError, CoreErrorCode};
pub use types::{AbyssSocket, ProfileId, SkillSet, Snapshot};
