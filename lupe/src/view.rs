use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

pub const ZOOM_MIN: i32 = 25;
pub const ZOOM_MAX: i32 = 500;
pub const ZOOM_DEFAULT: i32 = 100;
/// One wheel tick.
pub const ZOOM_STEP_WHEEL: i32 = 10;
/// One +/- button press.
pub const ZOOM_STEP_BUTTON: i32 = 25;
/// Overlay grid pitch in CSS pixels; does not scale with zoom.
pub const GRID_SPACING: f64 = 20.0;
pub const BG_COLOR_DEFAULT: &str = "#ffffff";

// Component-style percent encoding, with '(' ')' and '\'' escaped as well.
const DATA_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*');

/// The document embedded as an inline image resource; nothing is fetched.
pub fn svg_data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(svg, DATA_URI)
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanPhase {
    Idle,
    /// Anchor = pointer position at press time minus the offset at press
    /// time, so a move maps straight to the new offset.
    Panning { anchor_x: f64, anchor_y: f64 },
}

#[derive(Debug)]
pub struct ViewState {
    zoom: i32,
    pan_x: f64,
    pan_y: f64,
    phase: PanPhase,
    grid: bool,
    bg_transparent: bool,
    bg_color: String,
    pending_bg: Option<String>,
    drag_over: bool,
}

impl Default for ViewState {
    fn default() -> ViewState {
        ViewState {
            zoom: ZOOM_DEFAULT,
            pan_x: 0.0,
            pan_y: 0.0,
            phase: PanPhase::Idle,
            grid: false,
            bg_transparent: true,
            bg_color: BG_COLOR_DEFAULT.to_string(),
            pending_bg: None,
            drag_over: false,
        }
    }
}

fn clamp_zoom(zoom: i32) -> i32 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

impl ViewState {
    pub fn new() -> ViewState {
        ViewState::default()
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.phase, PanPhase::Panning { .. })
    }

    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    // Pan state machine. Only the primary button starts a pan; pointer-up
    // may arrive from anywhere in the application, not just the preview.

    pub fn pointer_down(&mut self, button: i16, x: f64, y: f64) {
        if button == 0 {
            self.phase = PanPhase::Panning {
                anchor_x: x - self.pan_x,
                anchor_y: y - self.pan_y,
            };
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let PanPhase::Panning { anchor_x, anchor_y } = self.phase {
            self.pan_x = x - anchor_x;
            self.pan_y = y - anchor_y;
        }
    }

    pub fn pointer_up(&mut self) {
        self.phase = PanPhase::Idle;
    }

    /// Wheel zoom; pan offset is untouched.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y > 0.0 {
            -ZOOM_STEP_WHEEL
        } else {
            ZOOM_STEP_WHEEL
        };
        self.zoom = clamp_zoom(self.zoom + step);
    }

    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Numeric-field input: a non-integer falls back to 100%.
    pub fn set_zoom_field(&mut self, text: &str) {
        self.set_zoom(text.trim().parse().unwrap_or(ZOOM_DEFAULT));
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP_BUTTON);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP_BUTTON);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZOOM_DEFAULT;
    }

    pub fn zoom_actual(&mut self) {
        self.zoom = ZOOM_DEFAULT;
    }

    // TODO: compute a real fit from the preview size and intrinsic size;
    // until then this mirrors "actual size".
    pub fn zoom_fit(&mut self) {
        self.zoom = ZOOM_DEFAULT;
    }

    /// Resets pan only; zoom is an independent axis.
    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn toggle_grid(&mut self) {
        self.grid = !self.grid;
    }

    pub fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    pub fn bg_transparent(&self) -> bool {
        self.bg_transparent
    }

    pub fn toggle_bg_transparent(&mut self) {
        self.bg_transparent = !self.bg_transparent;
    }

    pub fn set_bg_transparent(&mut self, transparent: bool) {
        self.bg_transparent = transparent;
    }

    pub fn bg_color(&self) -> &str {
        &self.bg_color
    }

    pub fn set_bg_color(&mut self, color: impl Into<String>) {
        self.bg_color = color.into();
    }

    /// Queue a background-color change from a continuous input device.
    /// Only the newest value survives until the next `flush_bg_color`.
    pub fn schedule_bg_color(&mut self, color: impl Into<String>) {
        self.pending_bg = Some(color.into());
    }

    /// Apply the pending color, if any. Called once per display frame by the
    /// shell; returns whether an update was applied.
    pub fn flush_bg_color(&mut self) -> bool {
        match self.pending_bg.take() {
            Some(color) => {
                self.bg_color = color;
                true
            }
            None => false,
        }
    }

    pub fn drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn set_drag_over(&mut self, over: bool) {
        self.drag_over = over;
    }

    // Rendering contract: outer translate by the pan offset, inner scale by
    // zoom/100 with the scale origin at the visual center.

    pub fn outer_transform(&self) -> String {
        format!("translate({}px, {}px)", self.pan_x, self.pan_y)
    }

    pub fn inner_transform(&self) -> String {
        format!("scale({})", f64::from(self.zoom) / 100.0)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            zoom: self.zoom,
            pan_x: self.pan_x,
            pan_y: self.pan_y,
            panning: self.is_panning(),
            grid: self.grid,
            bg_transparent: self.bg_transparent,
            bg_color: self.bg_color.clone(),
            drag_over: self.drag_over,
        }
    }
}

/// Plain snapshot of the view for the host; field names match the JS side.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub zoom: i32,
    pub pan_x: f64,
    pub pan_y: f64,
    pub panning: bool,
    pub grid: bool,
    pub bg_transparent: bool,
    pub bg_color: String,
    pub drag_over: bool,
}
