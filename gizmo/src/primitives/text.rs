use std::fmt::{self, Write};

use redlilium_core::math::{Vec2, Vec3};

use super::{Primitive, ShapeKind};
use crate::config::RenderConfig;
use crate::host::Geometry;
use crate::render::RenderContext;
use crate::style::Style;
use crate::{GizmoError, ResourceKind};

/// A floating text label at a world position.
///
/// Drawn as a container/label pair: the container faces the screen and is
/// sized from the text, the label sits inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub position: Vec3,
    pub text: String,
}

impl TextShape {
    /// A label showing `text` verbatim.
    pub fn new(position: Vec3, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// A label showing `template` with its `{}` placeholders filled from `args`.
    pub fn formatted(
        position: Vec3,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<Self, GizmoError> {
        Ok(Self::new(position, format_text(template, args)?))
    }
}

impl Primitive for TextShape {
    const SHAPE: ShapeKind = ShapeKind::Text;
    const KINDS: &'static [ResourceKind] = &[ResourceKind::TextContainer, ResourceKind::TextLabel];

    fn render(&self, style: &Style, cx: &mut RenderContext<'_>) -> Result<(), GizmoError> {
        let [container, label] =
            cx.acquire([ResourceKind::TextContainer, ResourceKind::TextLabel])?;
        let size = measure_text(&self.text, cx.config(), style.scale);

        cx.configure(
            container,
            style,
            &Geometry::TextContainer {
                position: self.position,
                size,
            },
        );
        cx.configure(
            label,
            style,
            &Geometry::TextLabel {
                container,
                text: self.text.clone(),
            },
        );
        cx.submit(&[container, label]);
        Ok(())
    }
}

/// Pixel size of the container needed for `text`.
///
/// Width follows the longest line, height the number of lines.
pub fn measure_text(text: &str, config: &RenderConfig, scale: f32) -> Vec2 {
    let (lines, widest) = text
        .split('\n')
        .fold((0usize, 0usize), |(lines, widest), line| {
            (lines + 1, widest.max(line.chars().count()))
        });
    Vec2::new(
        widest as f32 * config.text_char_width * scale,
        lines as f32 * config.text_line_height * scale,
    )
}

/// Fill `{}` placeholders in `template` with `args`, in order.
///
/// `{{` and `}}` produce literal braces. The number of placeholders must
/// match the number of arguments exactly.
pub fn format_text(template: &str, args: &[&dyn fmt::Display]) -> Result<String, GizmoError> {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                let arg = args.get(next_arg).ok_or_else(|| {
                    GizmoError::TextFormat(format!(
                        "template {template:?} has more placeholders than the {} argument(s) given",
                        args.len()
                    ))
                })?;
                write!(out, "{arg}").map_err(|e| GizmoError::TextFormat(e.to_string()))?;
                next_arg += 1;
            }
            '{' => {
                return Err(GizmoError::TextFormat(format!(
                    "unmatched '{{' in template {template:?}"
                )));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => {
                return Err(GizmoError::TextFormat(format!(
                    "unmatched '}}' in template {template:?}"
                )));
            }
            _ => out.push(c),
        }
    }

    if next_arg != args.len() {
        return Err(GizmoError::TextFormat(format!(
            "template {template:?} uses {next_arg} of {} argument(s)",
            args.len()
        )));
    }
    Ok(out)
}
