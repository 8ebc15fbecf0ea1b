//! Half-block terminal canvas.
//!
//! The world is sampled into a pixel grid two pixels tall per terminal
//! row. Each cell is printed as `▀` with the top pixel as foreground and
//! the bottom pixel as background, then stamped row-by-row as Paragraph
//! spans. Text is overlaid on whole cells after the pixels are resolved.

use std::io;

use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};

use crate::runner::render::Canvas;
use crate::runner::sprites::{Sprite, SpriteId};

const BACKDROP: Color = Color::Rgb(247, 247, 247);
const INK: Color = Color::Rgb(83, 83, 83);
const HALF_BLOCK: char = '\u{2580}'; // ▀

fn sprite_color(id: SpriteId) -> Color {
    match id {
        SpriteId::DinoIdle | SpriteId::DinoRun1 | SpriteId::DinoRun2 | SpriteId::DinoJump => INK,
        SpriteId::CactusSmall => Color::Rgb(70, 140, 70),
        SpriteId::CactusLarge => Color::Rgb(60, 125, 60),
        SpriteId::CactusCluster => Color::Rgb(50, 110, 50),
        SpriteId::Ground => Color::Rgb(140, 120, 95),
    }
}

/// Row-major colour grid, `height` is twice the terminal rows.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    px: Vec<Color>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![BACKDROP; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill(&mut self, color: Color) {
        self.px.fill(color);
    }

    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.px[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.px[y * self.width + x]
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

struct TextOverlay {
    text: String,
    col: i64,
    row: i64,
}

/// [`Canvas`] drawing a world of `world_width` x `world_height` pixels onto
/// the whole terminal.
pub struct TerminalCanvas<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    area: Rect,
    pixels: PixelGrid,
    /// World pixels per grid pixel.
    scale_x: f64,
    scale_y: f64,
    texts: Vec<TextOverlay>,
}

impl<'a, B: Backend> TerminalCanvas<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, world_width: f64, world_height: f64) -> io::Result<Self> {
        let area = terminal.size()?;
        let cols = (area.width as usize).max(1);
        let rows = (area.height as usize).max(1);
        let pixels = PixelGrid::new(cols, rows * 2);
        Ok(Self {
            terminal,
            area,
            scale_x: world_width / cols as f64,
            scale_y: world_height / pixels.height() as f64,
            pixels,
            texts: Vec::new(),
        })
    }

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// Resolve pixels and overlays into terminal cells.
    fn cells(&self) -> Vec<Vec<Cell>> {
        let rows = self.pixels.height() / 2;
        let mut cells: Vec<Vec<Cell>> = (0..rows)
            .map(|row| {
                (0..self.pixels.width())
                    .map(|col| {
                        let top = self.pixels.get(col, row * 2);
                        let bottom = self.pixels.get(col, row * 2 + 1);
                        if top == bottom {
                            Cell { ch: ' ', fg: top, bg: bottom }
                        } else {
                            Cell { ch: HALF_BLOCK, fg: top, bg: bottom }
                        }
                    })
                    .collect()
            })
            .collect();

        for overlay in &self.texts {
            if overlay.row < 0 || overlay.row >= rows as i64 {
                continue;
            }
            let line = &mut cells[overlay.row as usize];
            for (i, ch) in overlay.text.chars().enumerate() {
                let col = overlay.col + i as i64;
                if col < 0 || col >= line.len() as i64 {
                    continue;
                }
                line[col as usize] = Cell { ch, fg: INK, bg: BACKDROP };
            }
        }
        cells
    }
}

impl<B: Backend> Canvas for TerminalCanvas<'_, B> {
    fn draw_background(&mut self) {
        self.pixels.fill(BACKDROP);
        self.texts.clear();
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: f64, y: f64) {
        let color = sprite_color(sprite.id);
        let first_col = (x / self.scale_x).floor().max(0.0) as i64;
        let last_col = ((x + sprite.width()) / self.scale_x).ceil() as i64;
        let first_row = (y / self.scale_y).floor().max(0.0) as i64;
        let last_row = ((y + sprite.height()) / self.scale_y).ceil() as i64;

        // Sample each grid pixel at its centre
        for gy in first_row..last_row.min(self.pixels.height() as i64) {
            let local_y = (gy as f64 + 0.5) * self.scale_y - y;
            if local_y < 0.0 || local_y >= sprite.height() {
                continue;
            }
            for gx in first_col..last_col.min(self.pixels.width() as i64) {
                let local_x = (gx as f64 + 0.5) * self.scale_x - x;
                if local_x < 0.0 || local_x >= sprite.width() {
                    continue;
                }
                if sprite.is_opaque(local_x as usize, local_y as usize) {
                    self.pixels.set(gx, gy, color);
                }
            }
        }
    }

    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.scale_x
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        self.texts.push(TextOverlay {
            text: text.to_string(),
            col: (x / self.scale_x).round() as i64,
            row: (y / (self.scale_y * 2.0)).floor() as i64,
        });
    }

    fn present(&mut self) -> io::Result<()> {
        let cells = self.cells();
        let area = self.area;
        self.terminal.draw(|frame| {
            for (row_idx, row) in cells.iter().enumerate() {
                let mut spans: Vec<Span> = Vec::new();
                let mut current = String::new();
                let mut style = (BACKDROP, BACKDROP);

                for cell in row {
                    if (cell.fg, cell.bg) != style && !current.is_empty() {
                        spans.push(Span::styled(
                            std::mem::take(&mut current),
                            Style::default().fg(style.0).bg(style.1),
                        ));
                    }
                    style = (cell.fg, cell.bg);
                    current.push(cell.ch);
                }
                if !current.is_empty() {
                    spans.push(Span::styled(
                        current,
                        Style::default().fg(style.0).bg(style.1),
                    ));
                }

                let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
                frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
            }
        })?;
        Ok(())
    }
}
