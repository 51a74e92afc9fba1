//! Render-adapter surface.
//!
//! The pager never paints. On every state change it asks the host to
//! repaint; the host then reads a [`RenderScene`] snapshot and draws it with
//! whatever canvas it has. The helpers here compute the scale/shade/translate
//! values so every adapter agrees on the visual contract.

use sheetdeck_graphics::Color;

use crate::style::SheetStyle;

/// Snapshot of what the pager wants on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderScene {
    /// Settled: paint only the current panel.
    Idle { current: usize },
    /// Mid-transition: paint `back` scaled and shaded underneath, `front`
    /// translated in from the left.
    Transition {
        front: usize,
        back: usize,
        progress: f32,
    },
}

/// Concrete paint parameters for a transition, derived from a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionFrame {
    pub front: usize,
    pub back: usize,
    /// Uniform scale applied to the back panel about the container center.
    pub back_scale: f32,
    /// Shade painted over the back panel.
    pub shade: Color,
    /// Horizontal translation of the front panel.
    pub front_offset_x: f32,
}

impl RenderScene {
    /// Resolve this scene against a style and container width. `None` when
    /// idle: there is nothing to compose, just paint the current panel.
    pub fn transition_frame(&self, style: &SheetStyle, width: f32) -> Option<TransitionFrame> {
        match *self {
            RenderScene::Idle { .. } => None,
            RenderScene::Transition {
                front,
                back,
                progress,
            } => Some(TransitionFrame {
                front,
                back,
                back_scale: back_panel_scale(progress, style.min_scale),
                shade: resolve_shade_color(style.shade_color, progress),
                front_offset_x: front_panel_offset(width, progress),
            }),
        }
    }
}

/// Scale of the receding back panel: full size at progress 0, `min_scale`
/// at progress 1.
pub fn back_panel_scale(progress: f32, min_scale: f32) -> f32 {
    1.0 - (1.0 - min_scale) * progress
}

/// Shade color over the back panel. The progress is clamped to [0, 1]
/// before scaling the configured alpha, so an overshooting drag cannot
/// produce an out-of-range channel.
pub fn resolve_shade_color(shade: Color, progress: f32) -> Color {
    shade.with_alpha(progress.clamp(0.0, 1.0) * shade.a())
}

/// Horizontal offset of the incoming front panel: one full width off-screen
/// to the left at progress 0, flush at progress 1.
pub fn front_panel_offset(width: f32, progress: f32) -> f32 {
    width * (progress - 1.0)
}
