use crate::grid::Grid;
use crate::results::PlacementRecord;
use std::fmt;

/// Width and height of a single cell, in pixels.
pub const CELL_SIZE: usize = 22;
const FONT_SIZE: usize = 15;
/// Offset from the cell's center to the text baseline.
const BASELINE_OFFSET: usize = 5;

/// Renders the grid as a standalone SVG document.
///
/// When `highlights` is given, each placement is circled with a blue ellipse running along the
/// word.
pub fn render_svg(grid: &Grid, highlights: Option<&[PlacementRecord]>) -> String {
    SvgDocument {
        grid,
        highlights: highlights.unwrap_or_default(),
    }
    .to_string()
}

struct SvgDocument<'a> {
    grid: &'a Grid,
    highlights: &'a [PlacementRecord],
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}'>",
            self.grid.cols() * CELL_SIZE,
            self.grid.rows() * CELL_SIZE
        )?;
        for (row, cells) in self.grid.iter_rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let x = col * CELL_SIZE;
                let y = row * CELL_SIZE;
                writeln!(
                    f,
                    "<rect x='{}' y='{}' width='{}' height='{}' stroke='black' fill='white' stroke-opacity='0'/>",
                    x, y, CELL_SIZE, CELL_SIZE
                )?;
                writeln!(
                    f,
                    "<text x='{}' y='{}' font-size='{}' text-anchor='middle' fill='black' font-family='Arial'>{}</text>",
                    x + CELL_SIZE / 2,
                    y + CELL_SIZE / 2 + BASELINE_OFFSET,
                    FONT_SIZE,
                    cell.map(escape).unwrap_or_default()
                )?;
            }
        }
        for record in self.highlights {
            let ellipse = Ellipse::around(record);
            writeln!(
                f,
                "<g transform='rotate({}, {}, {})'><ellipse cx='{}' cy='{}' rx='{}' ry='{}' stroke='blue' fill='none' stroke-width='1'/></g>",
                ellipse.angle, ellipse.cx, ellipse.cy, ellipse.cx, ellipse.cy, ellipse.rx, ellipse.ry
            )?;
        }
        writeln!(f, "</svg>")
    }
}

/// The outline drawn around a placed word, before rotation.
#[derive(Debug, PartialEq)]
struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    /// Rotation in degrees around `(cx, cy)`.
    angle: f64,
}

impl Ellipse {
    fn around(record: &PlacementRecord) -> Ellipse {
        let cell = CELL_SIZE as f64;
        let center = |index: usize| index as f64 * cell + cell / 2.0;
        let (end_row, end_col) = record.end();
        let cx = (center(record.col) + center(end_col)) / 2.0;
        let cy = (center(record.row) + center(end_row)) / 2.0;
        let length = record.len() as f64;
        let direction = record.direction;

        if direction.is_diagonal() {
            let (d_row, d_col) = direction.delta();
            let distance = (length - 1.0) * cell * std::f64::consts::SQRT_2;
            Ellipse {
                cx,
                cy,
                rx: distance / 2.0,
                ry: cell / 3.0,
                angle: (d_row as f64).atan2(d_col as f64).to_degrees(),
            }
        } else if direction.delta().0 == 0 {
            Ellipse {
                cx,
                cy,
                rx: length * cell / 2.0,
                ry: cell / 3.0,
                angle: 0.0,
            }
        } else {
            Ellipse {
                cx,
                cy,
                rx: cell / 3.0,
                ry: length * cell / 2.0,
                angle: 0.0,
            }
        }
    }
}

fn escape(letter: char) -> String {
    match letter {
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '&' => "&amp;".to_string(),
        '\'' => "&apos;".to_string(),
        '"' => "&quot;".to_string(),
        other => other.to_string(),
    }
}
