//! Circle (C) and rectangle (R) anchor points of the logo.

use super::{LogoInputs, Point, Projections};
use crate::trig::{cos_deg, sin_deg};

/// Top-left anchor the chain starts from, before the half-size offset
const ORIGIN: Point = Point::new(50.0, 400.0);

/// Every derived value for one set of inputs.
///
/// Points are evaluated in declaration order; each one only reads the
/// projections and the points declared above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoLayout {
    pub input: LogoInputs,
    pub lengths: Projections,
    pub c1: Point,
    pub r1: Point,
    pub c2: Point,
    pub r2: Point,
    pub c3: Point,
    pub r3: Point,
    pub r4: Point,
    pub c4: Point,
    pub r5: Point,
}

impl LogoLayout {
    pub fn compute(input: LogoInputs) -> Self {
        let p = Projections::compute(&input);
        let angle = input.angle as f64;
        let size = input.size as f64;
        let (sin, cos) = (sin_deg(angle), cos_deg(angle));

        let half = size / 2.0;
        let sin_half = sin * size / 2.0;
        let cos_half = cos * size / 2.0;

        let c1 = Point::new(ORIGIN.x + half, ORIGIN.y + half);
        let r1 = Point::new(c1.x - sin_half, c1.y - cos_half - p.rhp);
        let c2 = Point::new(r1.x + p.rwp + sin_half - half, r1.y + cos_half - half);
        let r2 = Point::new(c2.x + half - sin_half, r1.y);
        let c3 = Point::new(r2.x + p.rwp + sin_half - half, c1.y);

        // x takes the sine term and y the cosine term on purpose
        let r3 = Point::new(
            (r1.x * 2.0 + p.rwpp - p.rwpp / 3.0) / 2.0,
            (r1.y * 2.0 + p.rhpp - p.rhpp / 3.0) / 2.0,
        );
        let r4 = Point::new((r2.x * 2.0 + p.rwpp - p.rwpp / 3.0) / 2.0, r3.y);
        let c4 = Point::new(c2.x + half - size / 6.0, c2.y + half - size / 6.0);
        let r5 = Point::new(
            (r2.x * 2.0 + p.rwpp - p.rwpp / 6.0) / 2.0,
            (r2.y * 2.0 + p.rhpp - p.rhpp / 6.0) / 2.0,
        );

        Self { input, lengths: p, c1, r1, c2, r2, c3, r3, r4, c4, r5 }
    }

    /// Labelled points in output order
    pub fn points(&self) -> [(&'static str, Point); 9] {
        [
            ("C1", self.c1),
            ("R1", self.r1),
            ("C2", self.c2),
            ("R2", self.r2),
            ("C3", self.c3),
            ("R3", self.r3),
            ("R4", self.r4),
            ("C4", self.c4),
            ("R5", self.r5),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({x}, {y}), got {actual}"
        );
    }

    fn assert_layout(layout: &LogoLayout, expected: [(f64, f64); 9]) {
        for ((label, point), (x, y)) in layout.points().into_iter().zip(expected) {
            assert!(
                (point.x - x).abs() < EPS && (point.y - y).abs() < EPS,
                "{label}: expected ({x}, {y}), got {point}"
            );
        }
    }

    #[test]
    fn golden_65_75_170() {
        let layout = LogoLayout::compute(LogoInputs::new(65, 75, 170));
        assert_layout(
            &layout,
            [
                (87.5, 437.5),
                (53.51345798612563, 267.5794913884933),
                (121.84510449591892, 245.92767620376952),
                (125.35856248204455, 267.5794913884933),
                (193.69020899183784, 437.5),
                (76.17115266204188, 278.1449479320108),
                (148.0162571579608, 278.1449479320108),
                (146.84510449591892, 270.9276762037695),
                (153.68068082693986, 280.78631206789015),
            ],
        );
    }

    #[test]
    fn zero_angle_collapses_to_axis_aligned() {
        let layout = LogoLayout::compute(LogoInputs::new(0, 75, 170));
        assert_layout(
            &layout,
            [
                (87.5, 437.5),
                (87.5, 400.0),
                (220.0, 400.0),
                (257.5, 400.0),
                (390.0, 437.5),
                (87.5, 425.0),
                (257.5, 425.0),
                (245.0, 425.0),
                (257.5, 431.25),
            ],
        );
        // R1 sits directly above C1 and the rectangles share one baseline
        assert_eq!(layout.r1.x, layout.c1.x);
        assert_eq!(layout.r1.y, layout.c2.y);
    }

    #[test]
    fn right_angle_stays_finite() {
        let layout = LogoLayout::compute(LogoInputs::new(90, 75, 170));
        assert!(layout.points().iter().all(|(_, p)| p.x.is_finite() && p.y.is_finite()));
        assert_layout(
            &layout,
            [
                (87.5, 437.5),
                (50.0, 267.5),
                (50.0, 230.0),
                (50.0, 267.5),
                (50.0, 437.5),
                (75.0, 267.5),
                (75.0, 267.5),
                (75.0, 255.0),
                (81.25, 267.5),
            ],
        );
    }

    #[test]
    fn negative_dimensions_compute() {
        let layout = LogoLayout::compute(LogoInputs::new(30, -20, -40));
        assert_point(layout.c1, 40.0, 390.0);
        assert_point(layout.r1, 45.0, 418.66025403784437);
        assert_point(layout.c2, 15.35898384862245, 420.0);
        assert_point(layout.r2, 10.35898384862245, 418.66025403784437);
        assert_point(layout.c3, -19.2820323027551, 390.0);
        assert_point(layout.r3, 41.666666666666664, 412.88675134594814);
        assert_point(layout.r4, 7.025650515289118, 412.88675134594814);
        assert_point(layout.c4, 8.692317181955785, 413.3333333333333);
        assert_point(layout.r5, 6.192317181955785, 411.44337567297407);
    }

    #[test]
    fn chain_shares_coordinates() {
        let layout = LogoLayout::compute(LogoInputs::new(65, 75, 170));
        assert_eq!(layout.r2.y, layout.r1.y);
        assert_eq!(layout.c3.y, layout.c1.y);
        assert_eq!(layout.r4.y, layout.r3.y);
    }

    #[test]
    fn deterministic() {
        let input = LogoInputs::new(123, 42, 311);
        assert_eq!(LogoLayout::compute(input), LogoLayout::compute(input));
    }

    #[test]
    fn points_order() {
        let layout = LogoLayout::compute(LogoInputs::new(65, 75, 170));
        let labels: Vec<&str> = layout.points().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["C1", "R1", "C2", "R2", "C3", "R3", "R4", "C4", "R5"]);
    }
}
