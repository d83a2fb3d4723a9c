use eframe::egui::Color32;

use crate::color::tab10;

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// A piece of text with its own colour (title, axis labels).
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub color: Color32,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: Color32::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
}

/// Whether an element is painted before or after the data artists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    BelowData,
    AboveData,
}

/// Grid lines along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLines {
    pub color: Color32,
    pub kind: LineKind,
    pub alpha: f32,
    pub layer: Layer,
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub color: Color32,
}

/// An infinite horizontal or vertical line at a fixed data coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub position: f64,
    pub color: Color32,
    pub kind: LineKind,
    pub width: f32,
    pub alpha: f32,
    pub label: Option<String>,
}

impl ReferenceLine {
    pub fn new(position: f64, color: Color32) -> Self {
        Self {
            position,
            color,
            kind: LineKind::Solid,
            width: 1.5,
            alpha: 1.0,
            label: None,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.kind = LineKind::Dashed;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Anything drawn on the surface that is not a bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Scatter {
        points: Vec<ScatterPoint>,
        radius: f32,
        alpha: f32,
        label: Option<String>,
    },
    HLine(ReferenceLine),
    VLine(ReferenceLine),
}

impl Artist {
    pub fn label(&self) -> Option<&str> {
        match self {
            Artist::Scatter { label, .. } => label.as_deref(),
            Artist::HLine(line) | Artist::VLine(line) => line.label.as_deref(),
        }
    }

    /// Colour shown for this artist in a fresh legend.
    fn legend_color(&self) -> Color32 {
        match self {
            Artist::Scatter { points, .. } => {
                points.first().map_or(Color32::GRAY, |p| p.color)
            }
            Artist::HLine(line) | Artist::VLine(line) => line.color,
        }
    }
}

/// One rectangle of a bar container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPatch {
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub face: Color32,
    pub edge: Color32,
    pub alpha: f32,
}

impl BarPatch {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// A group of bars sharing one label, restyled as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct BarContainer {
    pub label: Option<String>,
    pub bars: Vec<BarPatch>,
}

// ---------------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub face: Color32,
    pub edge: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub text: String,
    pub text_color: Color32,
    pub swatch: Swatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

// ---------------------------------------------------------------------------
// ChartSurface – the retained axis that styling mutates
// ---------------------------------------------------------------------------

/// Retained description of one chart.
///
/// Figure builders add artists to it, the styling helper recolours it, and
/// `ui::plot` renders it every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSurface {
    pub title: Label,
    pub x_label: Label,
    pub y_label: Label,
    /// Border of the plotting area. egui_plot draws it as one frame.
    pub frame_color: Color32,
    /// Tick labels on both axes.
    pub tick_color: Color32,
    pub x_grid: Option<GridLines>,
    pub y_grid: Option<GridLines>,
    pub artists: Vec<Artist>,
    pub containers: Vec<BarContainer>,
    pub legend: Option<Legend>,
    color_cycle: Vec<Color32>,
    cycle_pos: usize,
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSurface {
    pub fn new() -> Self {
        Self {
            title: Label::default(),
            x_label: Label::default(),
            y_label: Label::default(),
            frame_color: Color32::BLACK,
            tick_color: Color32::BLACK,
            x_grid: None,
            y_grid: None,
            artists: Vec::new(),
            containers: Vec::new(),
            legend: None,
            color_cycle: tab10(),
            cycle_pos: 0,
        }
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title.text = text.into();
    }

    pub fn set_x_label(&mut self, text: impl Into<String>) {
        self.x_label.text = text.into();
    }

    pub fn set_y_label(&mut self, text: impl Into<String>) {
        self.y_label.text = text.into();
    }

    // ---- colour cycle ----

    /// Replace the cycle used for artists added without a colour.
    /// Already drawn artists keep their colours.
    pub fn set_color_cycle(&mut self, colors: Vec<Color32>) {
        if colors.is_empty() {
            return;
        }
        self.color_cycle = colors;
        self.cycle_pos = 0;
    }

    pub fn next_cycle_color(&mut self) -> Color32 {
        let color = self.color_cycle[self.cycle_pos % self.color_cycle.len()];
        self.cycle_pos += 1;
        color
    }

    // ---- drawing ----

    pub fn scatter(
        &mut self,
        points: Vec<ScatterPoint>,
        radius: f32,
        alpha: f32,
        label: Option<String>,
    ) {
        self.artists.push(Artist::Scatter {
            points,
            radius,
            alpha,
            label,
        });
    }

    pub fn axhline(&mut self, line: ReferenceLine) {
        self.artists.push(Artist::HLine(line));
    }

    pub fn axvline(&mut self, line: ReferenceLine) {
        self.artists.push(Artist::VLine(line));
    }

    /// Add a bar group painted in `face`, or in the next cycle colour when
    /// no face is given. Individual bars can be recoloured afterwards.
    pub fn bar_container(
        &mut self,
        label: Option<String>,
        mut bars: Vec<BarPatch>,
        face: Option<Color32>,
    ) {
        let face = face.unwrap_or_else(|| self.next_cycle_color());
        for bar in &mut bars {
            bar.face = face;
        }
        self.containers.push(BarContainer { label, bars });
    }

    /// Snapshot a legend from the labelled artists, then labelled containers.
    pub fn legend(&mut self) {
        let text_color = Color32::BLACK;
        let from_artists = self.artists.iter().filter_map(|a| {
            a.label().map(|text| (text.to_string(), a.legend_color()))
        });
        let from_containers = self.containers.iter().filter_map(|c| {
            let text = c.label.clone()?;
            let color = c.bars.first().map_or(Color32::GRAY, |b| b.face);
            Some((text, color))
        });

        let entries = from_artists
            .chain(from_containers)
            .map(|(text, color)| LegendEntry {
                text,
                text_color,
                swatch: Swatch {
                    face: color,
                    edge: color,
                },
            })
            .collect();
        self.legend = Some(Legend { entries });
    }

    /// Extent of all data: `([x_min, y_min], [x_max, y_max])`.
    ///
    /// Reference lines only contribute along their own axis. Returns `None`
    /// while nothing has been drawn.
    pub fn data_bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        let mut include = |axis: usize, v: f64| {
            min[axis] = min[axis].min(v);
            max[axis] = max[axis].max(v);
        };

        for artist in &self.artists {
            match artist {
                Artist::Scatter { points, .. } => {
                    for p in points {
                        include(0, p.x);
                        include(1, p.y);
                    }
                }
                Artist::HLine(line) => include(1, line.position),
                Artist::VLine(line) => include(0, line.position),
            }
        }
        for bar in self.containers.iter().flat_map(|c| &c.bars) {
            include(0, bar.left);
            include(0, bar.left + bar.width);
            include(1, 0.0);
            include(1, bar.height);
        }

        if min.iter().chain(&max).all(|v| v.is_finite()) {
            Some((min, max))
        } else {
            None
        }
    }
}
