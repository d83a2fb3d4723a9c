use std::collections::BTreeMap;

use eframe::egui::Color32;

use super::surface::{ChartSurface, GridLines, Layer, LineKind, Swatch};
use crate::color::to_hex;

// ---------------------------------------------------------------------------
// Style options
// ---------------------------------------------------------------------------

/// House style for a chart. Every field is optional in spirit: the defaults
/// only recolour text and turn both grids off.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOptions {
    /// Plot frame, tick labels, axis labels, title and legend text.
    pub text_color: Color32,
    pub grid_color: Color32,
    pub grid_on_x: bool,
    pub grid_on_y: bool,
    /// Colour cycle for artists added *after* styling.
    pub data_colors: Option<Vec<Color32>>,
    /// Bar group / legend label → colour.
    pub column_color_map: Option<BTreeMap<String, Color32>>,
    /// Paint every bar and legend swatch this colour. Wins over
    /// `column_color_map`.
    pub single_data_color: Option<Color32>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            text_color: Color32::from_rgb(0x22, 0x1F, 0x20),
            grid_color: Color32::from_rgb(0xC5, 0xC5, 0xC4),
            grid_on_x: false,
            grid_on_y: false,
            data_colors: None,
            column_color_map: None,
            single_data_color: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Styling applier
// ---------------------------------------------------------------------------

/// Apply `opts` to `surface` in place. Only presentation changes; the data
/// of the artists is left untouched. Applying the same options twice gives
/// the same result as applying them once.
pub fn apply_graph_styling(surface: &mut ChartSurface, opts: &StyleOptions) {
    // 1) colour cycle for future artists
    if let Some(colors) = &opts.data_colors {
        surface.set_color_cycle(colors.clone());
    }

    // 2) frame, ticks, axis labels, title
    surface.frame_color = opts.text_color;
    surface.tick_color = opts.text_color;
    surface.x_label.color = opts.text_color;
    surface.y_label.color = opts.text_color;
    surface.title.color = opts.text_color;

    // 3) grids
    surface.x_grid = opts.grid_on_x.then_some(GridLines {
        color: opts.grid_color,
        kind: LineKind::Solid,
        alpha: 1.0,
        layer: Layer::BelowData,
    });
    surface.y_grid = opts.grid_on_y.then_some(GridLines {
        color: opts.grid_color,
        kind: LineKind::Dashed,
        alpha: 0.7,
        layer: Layer::AboveData,
    });

    // 4) legend text
    if let Some(legend) = &mut surface.legend {
        for entry in &mut legend.entries {
            entry.text_color = opts.text_color;
        }
    }

    // 5) one colour for everything
    if let Some(color) = opts.single_data_color {
        log::debug!(
            "styling: {} applied to {} bar containers",
            to_hex(color),
            surface.containers.len()
        );
        for bar in surface.containers.iter_mut().flat_map(|c| c.bars.iter_mut()) {
            bar.face = color;
        }
        if let Some(legend) = &mut surface.legend {
            for entry in &mut legend.entries {
                entry.swatch = Swatch {
                    face: color,
                    edge: color,
                };
            }
        }
        return;
    }

    // 6) per-label colours
    if let Some(map) = opts.column_color_map.as_ref().filter(|m| !m.is_empty()) {
        for container in &mut surface.containers {
            let Some(color) = container.label.as_ref().and_then(|l| map.get(l)) else {
                continue;
            };
            for bar in &mut container.bars {
                bar.face = *color;
            }
        }
        if let Some(legend) = &mut surface.legend {
            for entry in &mut legend.entries {
                if let Some(&color) = map.get(&entry.text) {
                    entry.swatch = Swatch {
                        face: color,
                        edge: color,
                    };
                }
            }
        }
    }
}
