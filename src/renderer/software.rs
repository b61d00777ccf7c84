//! ---------------------------------------------------------------------------
//! Software (CPU) column renderer
//!
//! * Fills an owned [`Framebuffer`] in **0x00RRGGBB** format.
//! * The scene pass writes every pixel of every column and the overlay pass
//!   starts with a clear, so nothing from the previous frame survives.
//! ---------------------------------------------------------------------------

pub mod overlay;
pub mod raycast;
pub mod scene;

use crate::renderer::{FrameInput, Framebuffer, RenderError, Renderer, Rgba};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    fb: Framebuffer,
}

impl Software {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            fb: Framebuffer::new(width, height),
        }
    }

    /// Finished pixels of the last frame.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        self.fb.resize(w, h);
    }

    fn draw_scene(&mut self, input: &FrameInput<'_>) -> Result<(), RenderError> {
        scene::render_scene(
            input.camera,
            input.map,
            input.palette,
            input.textures,
            &mut self.fb,
        )
    }

    fn draw_overlay(&mut self, input: &FrameInput<'_>) {
        overlay::render_overlay(input.camera, input.map, input.palette, &mut self.fb);
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(self.fb.pixels(), self.fb.width(), self.fb.height());
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
