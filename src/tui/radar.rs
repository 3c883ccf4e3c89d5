//! Radar (spider) chart of the current ratings, drawn on a ratatui canvas.
//!
//! Axis 0 points east and the rest follow counter-clockwise, one per component.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::Block;

use crate::scoring::{ScoreEngine, ValueSet, MAX_VALUE};
use crate::tui::theme::ThemeColors;

const GRID_RINGS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];
const LABEL_RADIUS: f64 = 11.2;
const Y_HALF_SPAN: f64 = 12.5;
// Samples per polygon edge and per ray from the centre when shading
const FILL_EDGE_STEPS: usize = 12;
const FILL_RAY_STEPS: usize = 10;

/// Polar to canvas coordinates.
fn to_xy(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

/// Closed outline through one point per rating: the first point is repeated
/// at the end.
pub fn value_polygon(values: &ValueSet) -> Vec<(f64, f64)> {
    let points = ScoreEngine::chart_points(values);
    let angles = ScoreEngine::radar_angles(points.len());

    let mut outline: Vec<(f64, f64)> = points
        .iter()
        .zip(&angles)
        .map(|((_, value), angle)| to_xy(value.clamp(0.0, MAX_VALUE), *angle))
        .collect();
    if let Some(first) = outline.first().copied() {
        outline.push(first);
    }
    outline
}

/// Points shading the interior of the value polygon.
///
/// Each edge is swept by rays from the centre, so every point lies in the
/// triangle between the centre and that edge.
pub fn value_fill(values: &ValueSet) -> Vec<(f64, f64)> {
    let outline = value_polygon(values);
    let mut fill = Vec::with_capacity(outline.len() * FILL_EDGE_STEPS * FILL_RAY_STEPS);

    for pair in outline.windows(2) {
        let ((ax, ay), (bx, by)) = (pair[0], pair[1]);
        for edge_step in 0..FILL_EDGE_STEPS {
            let t = edge_step as f64 / FILL_EDGE_STEPS as f64;
            let (ex, ey) = (ax + (bx - ax) * t, ay + (by - ay) * t);
            for ray_step in 1..=FILL_RAY_STEPS {
                let s = ray_step as f64 / FILL_RAY_STEPS as f64;
                fill.push((ex * s, ey * s));
            }
        }
    }
    fill
}

/// Closed ring at `radius` through every axis.
fn ring(radius: f64, axes: usize) -> Vec<(f64, f64)> {
    let mut outline: Vec<(f64, f64)> = ScoreEngine::radar_angles(axes)
        .into_iter()
        .map(|angle| to_xy(radius, angle))
        .collect();
    if let Some(first) = outline.first().copied() {
        outline.push(first);
    }
    outline
}

/// Horizontal half-span that keeps the chart round on cells roughly twice as
/// tall as they are wide.
fn x_half_span(area: Rect) -> f64 {
    if area.height == 0 {
        return Y_HALF_SPAN;
    }
    let ratio = f64::from(area.width) / (2.0 * f64::from(area.height));
    (Y_HALF_SPAN * ratio).max(Y_HALF_SPAN)
}

pub fn render_radar(frame: &mut Frame, area: Rect, values: &ValueSet, theme: &ThemeColors) {
    let block = Block::bordered()
        .title(" Motivation profile ")
        .border_style(Style::default().fg(theme.muted));
    let inner = block.inner(area);

    let x_half = x_half_span(inner);
    // Canvas units per terminal column, for centring labels
    let char_width = if inner.width > 0 {
        2.0 * x_half / f64::from(inner.width)
    } else {
        0.0
    };

    let points = ScoreEngine::chart_points(values);
    let angles = ScoreEngine::radar_angles(points.len());
    let outline = value_polygon(values);
    let fill = value_fill(values);
    let axes = points.len();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-Y_HALF_SPAN, Y_HALF_SPAN])
        .paint(move |ctx| {
            for radius in GRID_RINGS {
                for pair in ring(radius, axes).windows(2) {
                    ctx.draw(&CanvasLine::new(
                        pair[0].0,
                        pair[0].1,
                        pair[1].0,
                        pair[1].1,
                        theme.radar_grid,
                    ));
                }
            }

            for angle in &angles {
                let (x, y) = to_xy(MAX_VALUE, *angle);
                ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, theme.radar_axis));
            }
            ctx.layer();

            ctx.draw(&Points {
                coords: &fill,
                color: theme.radar_fill,
            });
            ctx.layer();

            for pair in outline.windows(2) {
                ctx.draw(&CanvasLine::new(
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1,
                    theme.radar_shape,
                ));
            }

            for ((label, _), angle) in points.iter().zip(&angles) {
                let (x, y) = to_xy(LABEL_RADIUS, *angle);
                let width = label.chars().count() as f64 * char_width;
                // Left-hand labels end at the axis tip, right-hand ones start there
                let x = if angle.cos() < -0.2 {
                    x - width
                } else if angle.cos() < 0.2 {
                    x - width / 2.0
                } else {
                    x
                };
                ctx.print(
                    x,
                    y,
                    Span::styled(label.to_string(), Style::default().fg(theme.radar_label)),
                );
            }
        });

    frame.render_widget(canvas, area);
}
