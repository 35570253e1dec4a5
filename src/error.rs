//! Error types for Formulator.

use crate::scenarios::ScenarioKind;
use crate::states::StateId;

/// Top-level error type for the bot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dialogue-engine errors.
///
/// Validation failures are not errors — a rejected input produces a normal
/// `Response` that re-offers the same options. These variants cover wiring
/// faults that an operator needs to see.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The session points at a state no transition is registered for.
    /// The session stays stuck; other sessions are unaffected.
    #[error("no transition handler registered for state {state}")]
    UnknownState { state: StateId },

    /// The session has a current state but no scenario instance, or an
    /// instance of a kind that does not own that state.
    #[error("session state {state} has no matching scenario instance")]
    CorruptSession { state: StateId },

    #[error(transparent)]
    Incomplete(#[from] IncompleteInstruction),
}

/// Assembly was invoked on an instance that is missing a field its path
/// requires. Unreachable through the transition graph; raised instead of
/// producing garbled output.
#[derive(Debug, thiserror::Error)]
#[error("cannot assemble {scenario} instruction: {field} is not set")]
pub struct IncompleteInstruction {
    pub scenario: ScenarioKind,
    pub field: &'static str,
}

/// Channel-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },

    #[error("Failed to send response on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },

    #[error("Invalid message format: {0}")]
    InvalidMessage(String),
}

/// Audit-sink errors. Never propagated into a user-visible response.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Failed to open audit store: {0}")]
    Open(String),

    #[error("Failed to record audit entry: {0}")]
    Write(String),
}

/// Result type alias for the bot.
pub type Result<T> = std::result::Result<T, Error>;
