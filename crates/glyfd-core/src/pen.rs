// this_file: crates/glyfd-core/src/pen.rs

//! SVG path recording pen.

use skrifa::outline::OutlinePen;
use std::fmt::Write;

/// A pen that records skrifa outline callbacks as an SVG path `d` string.
///
/// Commands are absolute (`M`, `L`, `Q`, `C`, `Z`), with axis-aligned
/// lines collapsed to `H`/`V` shortcuts and duplicate line-to points
/// dropped. Consecutive commands concatenate without a separator;
/// coordinates inside a command are space separated, and integral
/// coordinates print without a decimal point. Coordinates are whatever
/// the draw settings deliver; with unscaled settings that is font
/// design units.
#[derive(Debug, Default)]
pub struct SvgPathPen {
    d: String,
    // Current point, None before the first move and after a close.
    current: Option<(f32, f32)>,
}

impl SvgPathPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pen and return the accumulated `d` string.
    ///
    /// An untouched pen finishes to the empty string, which is how
    /// outline-less glyphs (a space, for instance) come out.
    pub fn finish(self) -> String {
        self.d
    }

    fn push_coord(&mut self, value: f32) {
        if value.fract() == 0.0 {
            let _ = write!(self.d, "{}", value as i64);
        } else {
            let _ = write!(self.d, "{value}");
        }
    }

    fn push_pair(&mut self, x: f32, y: f32) {
        self.push_coord(x);
        self.d.push(' ');
        self.push_coord(y);
    }
}

impl OutlinePen for SvgPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.d.push('M');
        self.push_pair(x, y);
        self.current = Some((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        match self.current {
            // Duplicate point, nothing to draw.
            Some((cx, cy)) if cx == x && cy == y => return,
            Some((cx, _)) if cx == x => {
                self.d.push('V');
                self.push_coord(y);
            },
            Some((_, cy)) if cy == y => {
                self.d.push('H');
                self.push_coord(x);
            },
            _ => {
                self.d.push('L');
                self.push_pair(x, y);
            },
        }
        self.current = Some((x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.d.push('Q');
        self.push_pair(cx0, cy0);
        self.d.push(' ');
        self.push_pair(x, y);
        self.current = Some((x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.d.push('C');
        self.push_pair(cx0, cy0);
        self.d.push(' ');
        self.push_pair(cx1, cy1);
        self.d.push(' ');
        self.push_pair(x, y);
        self.current = Some((x, y));
    }

    fn close(&mut self) {
        self.d.push('Z');
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{BezPath, PathEl, Point};

    #[test]
    fn rectangle_uses_shortcut_commands() {
        let mut pen = SvgPathPen::new();
        pen.move_to(0.0, 0.0);
        pen.line_to(100.0, 0.0);
        pen.line_to(100.0, 100.0);
        pen.line_to(0.0, 100.0);
        pen.close();
        assert_eq!(pen.finish(), "M0 0H100V100H0Z");
    }

    #[test]
    fn rectangle_round_trips_through_svg_parsing() {
        let mut pen = SvgPathPen::new();
        pen.move_to(10.0, 20.0);
        pen.line_to(110.0, 20.0);
        pen.line_to(110.0, 220.0);
        pen.line_to(10.0, 220.0);
        pen.close();
        let d = pen.finish();

        let path = BezPath::from_svg(&d).expect("emitted d string parses as SVG");
        let points: Vec<Point> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(
            points,
            vec![
                Point::new(10.0, 20.0),
                Point::new(110.0, 20.0),
                Point::new(110.0, 220.0),
                Point::new(10.0, 220.0),
            ]
        );
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
    }

    #[test]
    fn diagonal_lines_stay_explicit() {
        let mut pen = SvgPathPen::new();
        pen.move_to(0.0, 0.0);
        pen.line_to(50.0, 70.0);
        pen.close();
        assert_eq!(pen.finish(), "M0 0L50 70Z");
    }

    #[test]
    fn duplicate_line_points_are_dropped() {
        let mut pen = SvgPathPen::new();
        pen.move_to(5.0, 5.0);
        pen.line_to(5.0, 5.0);
        pen.line_to(9.0, 5.0);
        pen.close();
        assert_eq!(pen.finish(), "M5 5H9Z");
    }

    #[test]
    fn curves_record_all_control_points() {
        let mut pen = SvgPathPen::new();
        pen.move_to(0.0, 0.0);
        pen.quad_to(10.0, 20.0, 30.0, 40.0);
        pen.curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        pen.close();
        assert_eq!(pen.finish(), "M0 0Q10 20 30 40C1 2 3 4 5 6Z");
    }

    #[test]
    fn fractional_and_negative_coordinates_format_plainly() {
        let mut pen = SvgPathPen::new();
        pen.move_to(-12.0, 0.5);
        pen.line_to(-12.0, -3.25);
        assert_eq!(pen.finish(), "M-12 0.5V-3.25");
    }

    #[test]
    fn untouched_pen_finishes_empty() {
        assert_eq!(SvgPathPen::new().finish(), "");
    }

    #[test]
    fn shortcut_state_resets_after_close() {
        // The first line of a new contour must not inherit the previous
        // contour's current point.
        let mut pen = SvgPathPen::new();
        pen.move_to(0.0, 0.0);
        pen.line_to(10.0, 0.0);
        pen.close();
        pen.move_to(20.0, 20.0);
        pen.line_to(20.0, 30.0);
        pen.close();
        assert_eq!(pen.finish(), "M0 0H10ZM20 20V30Z");
    }
}
