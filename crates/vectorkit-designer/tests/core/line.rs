use proptest::prelude::*;
use vectorkit_designer::model::{DesignLine, Slope};
use vectorkit_designer::Point;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y).expect("finite point")
}

fn non_finite() -> impl Strategy<Value = f64> {
    prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]
}

#[test]
fn test_create_line_from_two_points() {
    let line = DesignLine::new(pt(1.0, 1.0), pt(2.0, 2.0)).expect("line");
    assert_eq!(line.a(), Some(1.0));
    assert_eq!(line.b(), Some(0.0));
    assert_eq!((line.point1().x(), line.point1().y()), (1.0, 1.0));
    assert_eq!((line.point2().x(), line.point2().y()), (2.0, 2.0));
}

#[test]
fn test_create_line_from_intercept_and_point() {
    let line = DesignLine::from_intercept(10.0, pt(1.0, 1.0)).expect("line");
    assert_eq!(line.b(), Some(10.0));
    assert_eq!(line.a(), Some(-9.0));
    // The given point lies on the resulting line.
    assert_eq!(line.a().zip(line.b()).map(|(a, b)| a * 1.0 + b), Some(1.0));
}

#[test]
fn test_nan_point_prevents_line() {
    let line = Point::new(f64::NAN, 2.0).and_then(|p| DesignLine::new(p, pt(1.0, 1.0)));
    assert!(line.is_err());
}

#[test]
fn test_vertical_line_is_explicit() {
    let line = DesignLine::from_intercept(4.0, pt(0.0, 1.0)).expect("vertical line");
    assert_eq!(line.slope(), Slope::Vertical { x: 0.0 });
    assert_eq!(line.b(), None);
}

proptest! {
    #[test]
    fn prop_both_points_satisfy_line_equation(
        x1 in -1e6f64..1e6,
        y1 in -1e6f64..1e6,
        x2 in -1e6f64..1e6,
        y2 in -1e6f64..1e6,
    ) {
        prop_assume!((x2 - x1).abs() > 1e-3);
        let line = DesignLine::new(pt(x1, y1), pt(x2, y2)).expect("line");
        let (a, b) = line.a().zip(line.b()).expect("finite slope");
        for (x, y) in [(x1, y1), (x2, y2)] {
            let tolerance = 1e-9 * (1.0 + (a * x).abs() + b.abs() + y.abs());
            prop_assert!((a * x + b - y).abs() <= tolerance, "{} vs {}", a * x + b, y);
        }
    }

    #[test]
    fn prop_non_finite_point_never_builds_a_line(
        bad in non_finite(),
        good in -1e6f64..1e6,
        which in 0usize..4,
    ) {
        let mut coords = [good; 4];
        coords[which] = bad;
        let line = Point::new(coords[0], coords[1])
            .and_then(|p1| Point::new(coords[2], coords[3]).map(|p2| (p1, p2)))
            .and_then(|(p1, p2)| DesignLine::new(p1, p2));
        prop_assert!(line.is_err());
    }

    #[test]
    fn prop_non_finite_slope_or_intercept_rejected(
        bad in non_finite(),
        x in -1e6f64..1e6,
        y in -1e6f64..1e6,
    ) {
        prop_assert!(DesignLine::from_slope(bad, pt(x, y)).is_err());
        prop_assert!(DesignLine::from_intercept(bad, pt(x, y)).is_err());
    }
}
