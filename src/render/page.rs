// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::layout::layout_number;
use crate::model::{NumberRange, Pattern, Point};

use super::{text_width, Canvas, CanvasError, ColorSource, BLACK};

/// Cells per grid row.
pub const GRID_COLUMNS: u64 = 3;
/// Edge length of one square cell, in pixels.
pub const CELL_SIZE: u32 = 300;
/// Dot radius, in pixels.
pub const DOT_RADIUS: f64 = 4.0;
/// Dot opacity over the white background.
pub const DOT_ALPHA: f64 = 0.8;

const LABEL_SCALE: u32 = 2;
const LABEL_TOP: u32 = 12;
const PLOT_TOP: u32 = 40;
const PLOT_MARGIN: u32 = 20;

/// Row-major arrangement of one cell per number, [`GRID_COLUMNS`] wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    range: NumberRange,
    rows: u64,
}

/// One slot of a [`Grid`]; trailing slots past the end of the range hold no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: u64,
    pub col: u64,
    pub number: Option<u64>,
}

impl Grid {
    pub fn for_range(range: NumberRange) -> Self {
        let rows = range.count().div_ceil(GRID_COLUMNS);
        Self { range, rows }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Number of cells that carry a number.
    pub fn populated(&self) -> u64 {
        self.range.count()
    }

    /// All `rows * columns` cells in drawing order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let start = self.range.start();
        let count = self.range.count();
        (0..self.rows * GRID_COLUMNS).map(move |idx| GridCell {
            row: idx / GRID_COLUMNS,
            col: idx % GRID_COLUMNS,
            number: (idx < count).then(|| start + idx),
        })
    }

    fn pixel_size(&self) -> Result<(u32, u32), CanvasError> {
        let width = GRID_COLUMNS as u32 * CELL_SIZE;
        let height = u32::try_from(self.rows)
            .ok()
            .and_then(|rows| rows.checked_mul(CELL_SIZE))
            .ok_or(CanvasError::AreaOverflow { width, height: u32::MAX })?;
        Ok((width, height))
    }
}

/// An encoded page plus the grid it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    grid: Grid,
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl RenderedPage {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Standard base64 of the PNG bytes, ready for a `data:image/png;base64,` URI.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }
}

#[derive(Debug)]
pub enum RenderError {
    Canvas(CanvasError),
    Encode(png::EncodingError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::Encode(err) => write!(f, "png encoding error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<CanvasError> for RenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(value: png::EncodingError) -> Self {
        Self::Encode(value)
    }
}

/// Draws one cell per number in `range` and encodes the page as PNG.
///
/// Cells are filled row-major in ascending order; each gets its number as a label and its
/// pattern scaled uniformly into the plot area. Cells past the end of the range stay blank.
pub fn render_page<C>(range: NumberRange, colors: &mut C) -> Result<RenderedPage, RenderError>
where
    C: ColorSource + ?Sized,
{
    let grid = Grid::for_range(range);
    let (width, height) = grid.pixel_size()?;
    let mut canvas = Canvas::new(width, height)?;

    for cell in grid.cells() {
        let Some(n) = cell.number else {
            continue;
        };
        let x0 = cell.col as u32 * CELL_SIZE;
        let y0 = cell.row as u32 * CELL_SIZE;
        draw_label(&mut canvas, x0, y0, n);
        draw_pattern(&mut canvas, x0, y0, &layout_number(n), colors);
    }

    let png = canvas.encode_png()?;
    Ok(RenderedPage { grid, width, height, png })
}

fn draw_label(canvas: &mut Canvas, x0: u32, y0: u32, n: u64) {
    let mut buf = itoa::Buffer::new();
    let label = buf.format(n);
    let w = text_width(label, LABEL_SCALE);
    let x = i64::from(x0) + (i64::from(CELL_SIZE) - i64::from(w)) / 2;
    let y = i64::from(y0 + LABEL_TOP);
    canvas.draw_text(x, y, label, LABEL_SCALE, BLACK);
}

/// Maps layout coordinates into the cell's plot area with equal x/y scale.
struct PlotTransform {
    center: Point,
    mid: Point,
    scale: f64,
}

impl PlotTransform {
    fn fit(pattern: &Pattern, x0: u32, y0: u32) -> Self {
        let left = f64::from(x0 + PLOT_MARGIN);
        let right = f64::from(x0 + CELL_SIZE - PLOT_MARGIN);
        let top = f64::from(y0 + PLOT_TOP);
        let bottom = f64::from(y0 + CELL_SIZE - PLOT_MARGIN);
        let center = Point::new((left + right) / 2.0, (top + bottom) / 2.0);
        let room = (right - left).min(bottom - top) - 2.0 * DOT_RADIUS;

        let (mid, span) = match pattern.bounds() {
            Some((min, max)) => (
                Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0),
                (max.x - min.x).max(max.y - min.y),
            ),
            None => (Point::ORIGIN, 0.0),
        };
        let scale = if span > f64::EPSILON { room / span } else { 1.0 };

        Self { center, mid, scale }
    }

    fn apply(&self, p: Point) -> (f64, f64) {
        let x = self.center.x + (p.x - self.mid.x) * self.scale;
        // Layout y grows upwards, pixel y grows downwards.
        let y = self.center.y - (p.y - self.mid.y) * self.scale;
        (x, y)
    }
}

fn draw_pattern<C>(canvas: &mut Canvas, x0: u32, y0: u32, pattern: &Pattern, colors: &mut C)
where
    C: ColorSource + ?Sized,
{
    let transform = PlotTransform::fit(pattern, x0, y0);
    for &p in pattern.points() {
        let (x, y) = transform.apply(p);
        canvas.fill_disc(x, y, DOT_RADIUS, colors.next_color(), DOT_ALPHA);
    }
}

#[cfg(test)]
mod tests {
    use super::{render_page, Grid, GridCell, PlotTransform, CELL_SIZE, PLOT_MARGIN, PLOT_TOP};
    use crate::layout::layout_number;
    use crate::model::{NumberRange, Point};
    use crate::render::{ColorSource, Rgb, SolidColor};

    /// Counts how often the renderer asks for a color.
    #[derive(Default)]
    struct CountingColors {
        calls: usize,
    }

    impl ColorSource for CountingColors {
        fn next_color(&mut self) -> Rgb {
            self.calls += 1;
            [0, 0, 0]
        }
    }

    fn range(start: u64, end: u64) -> NumberRange {
        NumberRange::new(start, end).expect("range")
    }

    #[test]
    fn grid_rounds_rows_up() {
        assert_eq!(Grid::for_range(range(5, 5)).rows(), 1);
        assert_eq!(Grid::for_range(range(1, 3)).rows(), 1);
        assert_eq!(Grid::for_range(range(1, 4)).rows(), 2);
        assert_eq!(Grid::for_range(range(1, 6)).rows(), 2);
        assert_eq!(Grid::for_range(range(10, 16)).rows(), 3);
    }

    #[test]
    fn grid_cells_are_row_major_with_blank_tail() {
        let grid = Grid::for_range(range(7, 10));
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], GridCell { row: 0, col: 0, number: Some(7) });
        assert_eq!(cells[2], GridCell { row: 0, col: 2, number: Some(9) });
        assert_eq!(cells[3], GridCell { row: 1, col: 0, number: Some(10) });
        assert_eq!(cells[4].number, None);
        assert_eq!(cells[5].number, None);
        assert_eq!(cells.iter().filter(|c| c.number.is_some()).count() as u64, grid.populated());
    }

    #[test]
    fn transform_keeps_points_inside_the_plot_area() {
        for n in [1, 3, 5, 12, 97] {
            let pattern = layout_number(n);
            let t = PlotTransform::fit(&pattern, CELL_SIZE, 0);
            for &p in pattern.points() {
                let (x, y) = t.apply(p);
                assert!(x >= f64::from(CELL_SIZE + PLOT_MARGIN), "n = {n}");
                assert!(x <= f64::from(2 * CELL_SIZE - PLOT_MARGIN), "n = {n}");
                assert!(y >= f64::from(PLOT_TOP), "n = {n}");
                assert!(y <= f64::from(CELL_SIZE - PLOT_MARGIN), "n = {n}");
            }
        }
    }

    #[test]
    fn transform_uses_equal_aspect() {
        let pattern = layout_number(7);
        let t = PlotTransform::fit(&pattern, 0, 0);
        let (cx, cy) = t.apply(Point::ORIGIN);
        let (rx, _) = t.apply(Point::new(1.0, 0.0));
        let (_, uy) = t.apply(Point::new(0.0, 1.0));
        assert!(((rx - cx) - (cy - uy)).abs() < 1e-9);
    }

    #[test]
    fn single_dot_lands_in_the_plot_center() {
        let pattern = layout_number(1);
        let t = PlotTransform::fit(&pattern, 0, 0);
        let (x, y) = t.apply(pattern.points()[0]);
        assert_eq!(x, f64::from(CELL_SIZE) / 2.0);
        assert_eq!(y, f64::from(PLOT_TOP + CELL_SIZE - PLOT_MARGIN) / 2.0);
    }

    #[test]
    fn page_size_follows_the_grid() {
        let page = render_page(range(1, 4), &mut SolidColor([0, 0, 255])).expect("render");
        assert_eq!(page.grid().rows(), 2);
        assert_eq!(page.width(), 3 * CELL_SIZE);
        assert_eq!(page.height(), 2 * CELL_SIZE);
        assert!(page.png().starts_with(&[0x89, b'P', b'N', b'G']));
        assert!(!page.to_base64().is_empty());
    }

    #[test]
    fn every_point_draws_its_own_color() {
        let numbers = range(1, 12);
        let mut colors = CountingColors::default();
        render_page(numbers, &mut colors).expect("render");

        let points = numbers.iter().map(|n| layout_number(n).len()).sum::<usize>();
        assert_eq!(points, 77);
        assert_eq!(colors.calls, points);
    }
}
