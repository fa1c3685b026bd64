//! Visual style records and the late-bound style resolver.

use serde::Deserialize;

/// Linear RGB color with components in `[0, 1]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Deserialize)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);

    /// Create a color from float components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Components as `[r, g, b]`.
    pub fn to_array(self) -> [f32; 3] {
        bytemuck::cast(self)
    }
}

/// The appearance applied to every primitive drawn in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Render over scene geometry regardless of depth.
    pub always_on_top: bool,
    pub color: Color3,
    /// Host render layer (z-index among overlays).
    pub layer: i32,
    /// `0.0` is opaque, `1.0` fully transparent.
    pub transparency: f32,
    /// Multiplier for thickness, marker size and text size. Must be positive.
    pub scale: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            always_on_top: true,
            color: Color3::from_rgb8(13, 105, 172),
            layer: 1,
            transparency: 0.0,
            scale: 1.0,
        }
    }
}

/// A partial style. Unset fields inherit from the global style at the
/// moment the style is resolved, not when the override is built.
///
/// Presence decides the override: a set field always wins, even when it
/// equals the global value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    pub always_on_top: Option<bool>,
    pub color: Option<Color3>,
    pub layer: Option<i32>,
    pub transparency: Option<f32>,
    pub scale: Option<f32>,
}

impl StyleOverride {
    /// An override that inherits everything.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = Some(always_on_top);
        self
    }

    pub fn with_color(mut self, color: Color3) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = Some(transparency);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay the set fields onto `base`.
    pub fn apply_to(&self, mut base: Style) -> Style {
        if let Some(v) = self.always_on_top {
            base.always_on_top = v;
        }
        if let Some(v) = self.color {
            base.color = v;
        }
        if let Some(v) = self.layer {
            base.layer = v;
        }
        if let Some(v) = self.transparency {
            base.transparency = v;
        }
        if let Some(v) = self.scale {
            base.scale = v;
        }
        base
    }
}

impl From<Style> for StyleOverride {
    fn from(style: Style) -> Self {
        Self {
            always_on_top: Some(style.always_on_top),
            color: Some(style.color),
            layer: Some(style.layer),
            transparency: Some(style.transparency),
            scale: Some(style.scale),
        }
    }
}

/// Resolve `partial` against the current global style.
///
/// While the system is inactive nothing will be drawn, so the global style
/// is returned as is and the override is ignored.
pub fn resolve_style(global: &Style, active: bool, partial: &StyleOverride) -> Style {
    if !active {
        return *global;
    }
    partial.apply_to(*global)
}
