pub mod config;
pub mod oracle;
pub mod referee;

pub use config::{RefereeConfig, DEFAULT_MAX_ATTEMPTS};
pub use oracle::{MoveOracle, ScriptedOracle};
pub use referee::{Referee, RefereeError};
