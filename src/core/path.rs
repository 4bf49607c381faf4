use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::format_number;
use crate::core::{Point, ViewBox};
use crate::error::{GraphError, GraphResult};

/// Height of the background mask band in view box units.
pub const BACKGROUND_MASK_HEIGHT: f64 = 42.0;

/// One absolute SVG path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M{} {}", format_number(p.x), format_number(p.y)),
            Self::LineTo(p) => write!(f, "L{} {}", format_number(p.x), format_number(p.y)),
            Self::Close => f.write_str("Z"),
        }
    }
}

/// Path data for the line, the overlay under it and the background band.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphPaths {
    pub line: String,
    pub overlay: String,
    pub background: String,
}

fn join(commands: impl IntoIterator<Item = PathCommand>) -> String {
    commands
        .into_iter()
        .map(|command| command.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn line_commands(points: &[Point]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len() + 1);
    if let Some(first) = points.first() {
        commands.push(PathCommand::MoveTo(Point::new(0.0, first.y)));
    }
    commands.extend(points.iter().copied().map(PathCommand::LineTo));
    commands
}

/// Line through `points`, anchored at `x = 0` on the first point's height.
#[must_use]
pub fn build_line_path(points: &[Point]) -> String {
    join(line_commands(points))
}

/// Line path closed along the right edge, the bottom and the left edge of
/// the view box, enclosing the area under the line.
#[must_use]
pub fn build_overlay_path(points: &[Point], view_box: ViewBox) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let right = view_box.width;
    let bottom = view_box.bottom();
    let closing: SmallVec<[PathCommand; 4]> = SmallVec::from_buf([
        PathCommand::LineTo(Point::new(right, last.y)),
        PathCommand::LineTo(Point::new(right, bottom)),
        PathCommand::LineTo(Point::new(view_box.origin_x, bottom)),
        PathCommand::LineTo(Point::new(view_box.origin_x, first.y)),
    ]);
    join(line_commands(points).into_iter().chain(closing))
}

/// Fixed band that stops short of the rightmost marker.
#[must_use]
pub fn build_background_mask(view_box: ViewBox, circle_diameter: f64) -> String {
    let right = view_box.width - circle_diameter;
    join([
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::LineTo(Point::new(0.0, BACKGROUND_MASK_HEIGHT)),
        PathCommand::LineTo(Point::new(right, BACKGROUND_MASK_HEIGHT)),
        PathCommand::LineTo(Point::new(right, 0.0)),
        PathCommand::Close,
    ])
}

/// Parses `M`/`L`/`Z` path data written by this module back into vertices.
pub fn parse_polyline(data: &str) -> GraphResult<Vec<Point>> {
    let mut vertices = Vec::new();
    let mut tokens = data.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "Z" {
            if let Some(first) = vertices.first().copied() {
                vertices.push(first);
            }
            continue;
        }
        let x = token
            .strip_prefix('M')
            .or_else(|| token.strip_prefix('L'))
            .ok_or_else(|| GraphError::InvalidData(format!("unsupported path token `{token}`")))?;
        let y = tokens
            .next()
            .ok_or_else(|| GraphError::InvalidData("path command missing y".to_owned()))?;
        let parse = |raw: &str| {
            raw.parse::<f64>()
                .map_err(|e| GraphError::InvalidData(format!("invalid path number `{raw}`: {e}")))
        };
        vertices.push(Point::new(parse(x)?, parse(y)?));
    }
    Ok(vertices)
}

/// Total length of the segments joining `vertices` in order.
#[must_use]
pub fn polyline_length(vertices: &[Point]) -> f64 {
    vertices
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .sum()
}
