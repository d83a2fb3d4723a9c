//! Retained chart model and its house style.
//!
//! `figures` builds a [`surface::ChartSurface`] per chart, `style` recolours
//! it, and `ui::plot` draws it with egui_plot.

pub mod figures;
pub mod histogram;
pub mod style;
pub mod surface;
