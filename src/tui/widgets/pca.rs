// src/tui/widgets/pca.rs — 3-D PCA scatter, projected through an orbit camera.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::{Line as TextLine, Span},
    widgets::{
        canvas::{Canvas, Line, Points},
        Block, Borders,
    },
    Frame,
};

use crate::playground::types::PcaPoint;
use crate::playground::view::{pca_extent, Camera, PcaItem};
use crate::tui::theme::Theme;

use super::ellipsize;

pub fn render(f: &mut Frame, area: Rect, points: &[PcaItem], camera: Camera) {
    let extent = pca_extent(points);
    let axes = axis_segments(extent, camera);
    let projected: Vec<((f64, f64), &PcaItem)> =
        points.iter().map(|p| (camera.project(p.point), p)).collect();
    let label_offset = extent * 0.04;

    let block = Block::default()
        .title(format!(
            " PCA · yaw {:.0}° pitch {:.0}° ",
            camera.yaw, camera.pitch
        ))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([-extent, extent])
        .y_bounds([-extent, extent])
        .paint(move |ctx| {
            for (name, (x1, y1), (x2, y2)) in &axes {
                ctx.draw(&Line {
                    x1: *x1,
                    y1: *y1,
                    x2: *x2,
                    y2: *y2,
                    color: Theme::MINT,
                });
                ctx.print(*x2, *y2, TextLine::from(Span::styled(*name, Theme::text_dim())));
            }
            ctx.layer();
            for ((x, y), item) in &projected {
                let color = Theme::item(&item.color);
                ctx.draw(&Points {
                    coords: &[(*x, *y)],
                    color,
                });
                ctx.print(
                    *x + label_offset,
                    *y,
                    TextLine::from(Span::styled(
                        ellipsize(&item.text, 20),
                        Style::default().fg(color),
                    )),
                );
            }
        });
    f.render_widget(canvas, area);
}

/// Projected end points of the three axes through the origin.
fn axis_segments(extent: f64, camera: Camera) -> Vec<(&'static str, (f64, f64), (f64, f64))> {
    let e = extent * 0.9;
    let axis = |name, from: PcaPoint, to: PcaPoint| (name, camera.project(from), camera.project(to));
    vec![
        axis(
            "x",
            PcaPoint { x: -e, y: 0.0, z: 0.0 },
            PcaPoint { x: e, y: 0.0, z: 0.0 },
        ),
        axis(
            "y",
            PcaPoint { x: 0.0, y: -e, z: 0.0 },
            PcaPoint { x: 0.0, y: e, z: 0.0 },
        ),
        axis(
            "z",
            PcaPoint { x: 0.0, y: 0.0, z: -e },
            PcaPoint { x: 0.0, y: 0.0, z: e },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_segments_symmetric() {
        let segs = axis_segments(2.0, Camera::default());
        assert_eq!(segs.len(), 3);
        for (_, (x1, y1), (x2, y2)) in segs {
            assert!((x1 + x2).abs() < 1e-9);
            assert!((y1 + y2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_z_axis_vertical_without_pitch() {
        let segs = axis_segments(1.0, Camera { yaw: 30.0, pitch: 0.0 });
        let (name, _, (x2, y2)) = segs[2];
        assert_eq!(name, "z");
        assert!(x2.abs() < 1e-9);
        assert!((y2 - 0.9).abs() < 1e-9);
    }
}
