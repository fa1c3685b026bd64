//! Gizmo error types.

use std::fmt;

use crate::ResourceKind;

/// Errors that can occur while drawing gizmos.
///
/// The error surface is narrow: style partials are not
/// validated, and a failed tick does not poison later ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GizmoError {
    /// The host could not create a renderable of the given kind.
    ResourceCreationFailed {
        kind: ResourceKind,
        message: String,
    },
    /// The host could not provide the private container or the shared anchor.
    ContainerUnavailable(String),
    /// A text template did not match its arguments.
    TextFormat(String),
    /// Configuration could not be read or parsed.
    Config(String),
}

impl fmt::Display for GizmoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceCreationFailed { kind, message } => {
                write!(f, "failed to create {kind} resource: {message}")
            }
            Self::ContainerUnavailable(msg) => write!(f, "gizmo container unavailable: {msg}"),
            Self::TextFormat(msg) => write!(f, "text format error: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for GizmoError {}
