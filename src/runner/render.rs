//! Render collaborator contract.
//!
//! The round only knows how to say "draw this sprite here". Anything that
//! can rasterise sprites and text in world coordinates can present a frame.

use std::io;

use super::sprites::{Sprite, SpriteId};

pub trait Canvas {
    /// Clear to the backdrop.
    fn draw_background(&mut self);

    /// Draw the opaque pixels of `sprite` with its top-left at `(x, y)`.
    fn draw_sprite(&mut self, sprite: &Sprite, x: f64, y: f64);

    /// Width of `text` in world pixels once drawn.
    fn text_width(&self, text: &str) -> f64;

    /// Draw `text` with its top-left at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64);

    /// Show the finished frame.
    fn present(&mut self) -> io::Result<()>;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background,
    Sprite { id: SpriteId, x: f64, y: f64 },
    Text { text: String, x: f64, y: f64 },
    Present,
}

/// Canvas that remembers draw calls instead of drawing. Text is measured
/// at a fixed width per character.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub char_width: f64,
}

impl RecordingCanvas {
    pub fn new(char_width: f64) -> Self {
        Self {
            calls: Vec::new(),
            char_width,
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_background(&mut self) {
        self.calls.push(DrawCall::Background);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: f64, y: f64) {
        self.calls.push(DrawCall::Sprite { id: sprite.id, x, y });
    }

    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn present(&mut self) -> io::Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}
