//! Gizmo configuration, loadable from TOML.
//!
//! ```toml
//! container_tag = "GizmoContainer"
//! start_active = true
//!
//! [visibility]
//! deferred_hide_period = 2
//!
//! [render]
//! line_thickness = 2.0
//!
//! [style]
//! color = { r = 1.0, g = 0.5, b = 0.0 }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::GizmoError;
use crate::style::Style;

/// Top-level configuration for a [`Gizmos`](crate::Gizmos) context.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GizmoConfig {
    /// Tag used to find or create the private container for pooled objects.
    pub container_tag: String,
    /// Tag used to find or create the shared overlay anchor.
    pub anchor_tag: String,
    /// Follow the host's external activation switch every tick.
    pub observe_activation_switch: bool,
    /// Enable drawing as soon as the context is created.
    pub start_active: bool,
    pub visibility: VisibilityConfig,
    pub render: RenderConfig,
    /// Initial global style.
    pub style: Style,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            container_tag: "GizmoContainer".to_string(),
            anchor_tag: "GizmoAnchor".to_string(),
            observe_activation_switch: true,
            start_active: false,
            visibility: VisibilityConfig::default(),
            render: RenderConfig::default(),
            style: Style::default(),
        }
    }
}

impl GizmoConfig {
    /// Parse a configuration from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GizmoError> {
        toml::from_str(content).map_err(|e| GizmoError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GizmoError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GizmoError::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| GizmoError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Load a configuration, falling back to defaults if it cannot be read.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded gizmo config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("No gizmo config ({e}), using defaults");
                Self::default()
            }
        }
    }
}

/// Deferred-hide policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Number of ticks in one deferred-hide cycle. Parked objects are hidden
    /// when the cycle wraps. `1` hides on the next tick.
    pub deferred_hide_period: u32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            deferred_hide_period: 2,
        }
    }
}

/// Size constants for primitives, all multiplied by [`Style::scale`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Line thickness in pixels.
    pub line_thickness: f32,
    /// Ring outline thickness in world units.
    pub ring_thickness: f32,
    /// Radius of point markers in world units.
    pub point_radius: f32,
    /// Arrow head length in world units, capped at half the arrow length.
    pub arrow_head_length: f32,
    /// Arrow head base radius in world units.
    pub arrow_head_radius: f32,
    /// Width of one text character in pixels.
    pub text_char_width: f32,
    /// Height of one text line in pixels.
    pub text_line_height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_thickness: 2.0,
            ring_thickness: 0.05,
            point_radius: 0.1,
            arrow_head_length: 0.5,
            arrow_head_radius: 0.2,
            text_char_width: 8.0,
            text_line_height: 16.0,
        }
    }
}
