//! Rendering abstraction layer.
//!
//! Two passes share one framebuffer:
//!
//! * [`RenderMode::Scene`]   – first-person raycast view ([`render_scene`]).
//! * [`RenderMode::Overlay`] – top-down debug map ([`render_overlay`]).
//!
//! A backend implements [`Renderer`]; the blanket [`RendererExt`] adds
//! `draw_frame`, the single entry point that dispatches on the mode.

mod framebuffer;
pub mod software;

pub use framebuffer::Framebuffer;
pub use software::{
    Software,
    overlay::render_overlay,
    raycast::{GridWalk, Hit, Side, Step, get_ray, trace},
    scene::{ColumnProjection, render_scene, texture_column, wall_height, wall_span},
};

use crate::world::{Camera, Palette, TextureBank, TextureError, TileMap};

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Which pass `draw_frame` runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Scene,
    Overlay,
}

impl RenderMode {
    /// Scene ↔ Overlay.
    pub fn toggle(self) -> Self {
        match self {
            RenderMode::Scene => RenderMode::Overlay,
            RenderMode::Overlay => RenderMode::Scene,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// Read-only inputs of one frame.
///
/// Map, palette and textures are loaded once and borrowed for the whole run;
/// the camera is a per-frame snapshot.
#[derive(Clone, Copy)]
pub struct FrameInput<'a> {
    pub camera: &'a Camera,
    pub map: &'a TileMap,
    pub palette: &'a Palette,
    pub textures: &'a TextureBank,
}

/// A renderer that owns the framebuffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// First-person pass.
    fn draw_scene(&mut self, input: &FrameInput<'_>) -> Result<(), RenderError>;

    /// Top-down pass.
    fn draw_overlay(&mut self, input: &FrameInput<'_>);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    /// Begin, draw the pass selected by `mode`, end.
    ///
    /// On a scene error the frame is abandoned and `submit` is not called.
    fn draw_frame<F>(
        &mut self,
        mode: RenderMode,
        width: usize,
        height: usize,
        input: &FrameInput<'_>,
        submit: F,
    ) -> Result<(), RenderError>
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        match mode {
            RenderMode::Scene => self.draw_scene(input)?,
            RenderMode::Overlay => self.draw_overlay(input),
        }
        self.end_frame(submit);
        Ok(())
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
