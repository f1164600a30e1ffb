//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameMode, Position, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// How grid cells map to terminal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellLayout {
    /// Each grid cell is two columns wide and one row tall.
    Wide,
    /// Each column holds two grid rows drawn with an upper half block
    /// (fg = top cell, bg = bottom cell).
    HalfBlock,
}

impl CellLayout {
    /// Size of the play area in terminal cells, without the border.
    fn area(self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        match self {
            CellLayout::Wide => (n * 2, n),
            CellLayout::HalfBlock => (n, n.div_ceil(2)),
        }
    }
}

const BACKGROUND: Rgb = Rgb::new(30, 30, 40);
const FRUIT: Rgb = Rgb::new(220, 60, 60);
const BODY: Rgb = Rgb::new(220, 220, 220);
const HEAD: Rgb = Rgb::new(120, 230, 120);

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    layout: CellLayout,
    anchor_y: AnchorY,
    /// Switch to `HalfBlock` when the wide board does not fit.
    auto_compact: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            layout: CellLayout::Wide,
            anchor_y: AnchorY::Center,
            auto_compact: true,
        }
    }
}

impl GameView {
    pub fn new(layout: CellLayout) -> Self {
        Self {
            layout,
            anchor_y: AnchorY::Center,
            auto_compact: false,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Layout used for a given viewport.
    pub fn layout_for(&self, viewport: Viewport) -> CellLayout {
        if !self.auto_compact || self.layout == CellLayout::HalfBlock {
            return self.layout;
        }
        let (w, h) = CellLayout::Wide.area();
        if viewport.width < w + 2 || viewport.height < h + 2 {
            CellLayout::HalfBlock
        } else {
            CellLayout::Wide
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout_for(viewport);
        let (area_w, area_h) = layout.area();
        let frame_w = area_w + 2;
        let frame_h = area_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        match layout {
            CellLayout::Wide => self.draw_wide(fb, snap, start_x + 1, start_y + 1),
            CellLayout::HalfBlock => self.draw_half_blocks(fb, snap, start_x + 1, start_y + 1),
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.won {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "BOARD FULL");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_wide(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, px: u16, py: u16) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BACKGROUND).dim();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let (ch, style) = match cell_color(snap, x, y) {
                    None => ('·', empty),
                    Some(fg) => ('█', CellStyle::new(fg, BACKGROUND).bold()),
                };
                let cx = px + (x as u16) * 2;
                let cy = py + y as u16;
                fb.put_char(cx, cy, ch, style);
                fb.put_char(cx + 1, cy, if ch == '·' { ' ' } else { ch }, style);
            }
        }
    }

    fn draw_half_blocks(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, px: u16, py: u16) {
        for row in 0..GRID_SIZE.div_ceil(2) {
            for x in 0..GRID_SIZE {
                let top = cell_color(snap, x, row * 2).unwrap_or(BACKGROUND);
                let bottom = cell_color(snap, x, row * 2 + 1).unwrap_or(BACKGROUND);
                fb.put_char(px + x as u16, py + row as u16, '▀', CellStyle::new(top, bottom));
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, snap.fruits_eaten, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "MODE", label);
        let mode = match snap.mode {
            GameMode::Classic => "CLASSIC",
            GameMode::NoWalls => "NO WALLS",
        };
        fb.put_str(panel_x, y + 1, mode, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_u32(panel_x, y + 1, snap.speed, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "GAME", label);
        fb.put_u32(panel_x, y + 1, snap.episode_id.wrapping_add(1), value);
        y = y.saturating_add(3);

        let status = if snap.won {
            "WON"
        } else if snap.heading.is_idle() {
            "READY"
        } else {
            "RUNNING"
        };
        fb.put_str(panel_x, y, status, label);
        y = y.saturating_add(2);

        let dim = value.dim();
        for line in ["arrows/wasd", "r restart", "m mode", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

        // Blank one-cell margin around the text.
        fb.fill_rect(
            x.saturating_sub(1),
            mid_y.saturating_sub(1),
            text_w + 2,
            3,
            ' ',
            style,
        );
        fb.put_str(x, mid_y, text, style);
    }
}

/// Fill color for a grid cell, `None` for empty cells.
fn cell_color(snap: &GameSnapshot, x: usize, y: usize) -> Option<Rgb> {
    if y >= GRID_SIZE {
        return None;
    }
    if snap.head == Position::new(x as i32, y as i32) && !snap.won {
        return Some(HEAD);
    }
    match snap.cell(x, y) {
        Cell::Empty => None,
        Cell::Fruit => Some(FRUIT),
        Cell::Snake(_) => Some(BODY),
    }
}
