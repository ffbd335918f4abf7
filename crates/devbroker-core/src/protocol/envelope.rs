//! Message envelopes carried between the presentation side and the host loop.
//!
//! Two kinds of traffic cross the bridge:
//!
//! - [`Invocation`]: a request/response command. The caller suspends on the
//!   embedded reply channel until the host loop answers; a per-call id ties
//!   log lines on both sides together.
//! - [`Notification`]: fire-and-forget, no reply, no suspension.
//!
//! Payloads are opaque JSON values. Handlers that need structure decode a
//! typed argument struct and reject malformed input as [`BridgeError::Host`].

use serde_json::Value;
use thiserror::Error;
use tokio::sync::oneshot;

use crate::protocol::commands::CommandKind;

/// Coarse failure taxonomy surfaced by `invoke`.
///
/// `invoke` never panics; every failure arrives as one of these. Enumeration
/// commands additionally absorb both reasons into an empty result before
/// they ever reach a caller, so in practice errors surface only for
/// malformed arguments or a torn-down host loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// No presentation surface or host resource is available to answer.
    /// Also returned when the host loop itself has shut down.
    #[error("host resource unavailable")]
    Unavailable,
    /// The underlying platform call failed, or the arguments were malformed.
    #[error("host error: {0}")]
    Host(String),
}

/// A single request/response command in flight.
///
/// The reply sender is single-use by construction: answering the invocation
/// consumes it. A dropped receiver (caller went away) is tolerated by the
/// host loop.
#[derive(Debug)]
pub struct Invocation {
    /// Per-call correlation id, used only for log correlation.
    pub id: u64,
    /// Which handler this request routes to.
    pub command: CommandKind,
    /// Opaque argument payload; `Value::Null` for argument-less commands.
    pub args: Value,
    /// Channel the host loop answers on.
    pub reply: oneshot::Sender<Result<Value, BridgeError>>,
}

/// A fire-and-forget message on a named topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub topic: String,
    pub payload: Value,
}

impl Notification {
    pub fn new(topic: impl Into<String>, payload: Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invocation_reply_is_single_use_and_correlated() {
        // Arrange
        let (tx, rx) = oneshot::channel();
        let invocation = Invocation {
            id: 7,
            command: CommandKind::GetCamera,
            args: Value::Null,
            reply: tx,
        };

        // Act – answering consumes the sender
        invocation.reply.send(Ok(Value::Array(vec![]))).unwrap();

        // Assert
        let answer = rx.await.unwrap().unwrap();
        assert_eq!(answer, Value::Array(vec![]));
    }

    #[test]
    fn test_dropped_reply_receiver_is_tolerated() {
        let (tx, rx) = oneshot::channel::<Result<Value, BridgeError>>();
        drop(rx);
        // send() reports the closed channel without panicking
        assert!(tx.send(Ok(Value::Null)).is_err());
    }

    #[test]
    fn test_bridge_error_display_is_stable() {
        assert_eq!(BridgeError::Unavailable.to_string(), "host resource unavailable");
        assert_eq!(
            BridgeError::Host("printer exploded".to_string()).to_string(),
            "host error: printer exploded"
        );
    }
}
