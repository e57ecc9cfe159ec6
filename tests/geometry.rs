mod common;

use exactgeom::hull::convex_hull;
use exactgeom::minkowski::minkowski_sum;
use exactgeom::point::{ccw, is_in_circumcircle, polygon_area_doubled, segments_intersect, Orientation, Point};

fn pt(x: i128, y: i128) -> Point {
    Point::new(x, y, 32)
}

#[test]
fn convex_hull_of_a_cross_shape_drops_the_center_point() {
    let points = vec![pt(0, 0), pt(2, 0), pt(1, 1), pt(0, 2), pt(2, 2)];
    let hull = convex_hull(&points);
    let coords: Vec<(i128, i128)> =
        hull.iter().map(|p| (p.x.to_i128().unwrap(), p.y.to_i128().unwrap())).collect();
    assert_eq!(coords, vec![(0, 0), (2, 0), (2, 2), (0, 2)]);
}

#[test]
fn hull_vertices_are_always_in_counter_clockwise_order() {
    let points = vec![pt(0, 0), pt(5, 0), pt(5, 3), pt(3, 5), pt(0, 5), pt(2, 2)];
    let hull = convex_hull(&points);
    for i in 0..hull.len() {
        let a = &hull[i];
        let b = &hull[(i + 1) % hull.len()];
        let c = &hull[(i + 2) % hull.len()];
        assert_eq!(ccw(a, b, c), Orientation::CounterClockwise);
    }
}

#[test]
fn minkowski_sum_of_unit_squares_has_quadrupled_area() {
    let a = vec![pt(0, 0), pt(1, 0), pt(1, 1), pt(0, 1)];
    let b = vec![pt(0, 0), pt(1, 0), pt(1, 1), pt(0, 1)];
    let sum = minkowski_sum(&a, &b);
    assert_eq!(polygon_area_doubled(&sum).to_i128(), Some(8));
}

#[test]
fn circumcircle_predicate_matches_a_known_right_triangle() {
    let a = pt(0, 0);
    let b = pt(4, 0);
    let c = pt(0, 4);
    assert_eq!(is_in_circumcircle(&a, &b, &c, &pt(1, 1)), 1);
    assert_eq!(is_in_circumcircle(&a, &b, &c, &pt(100, 100)), -1);
}

#[test]
fn segment_intersection_agrees_with_orientation_based_cases() {
    assert!(segments_intersect(&pt(0, 0), &pt(4, 4), &pt(0, 4), &pt(4, 0)));
    assert!(!segments_intersect(&pt(0, 0), &pt(1, 0), &pt(2, 0), &pt(3, 0)));
    assert!(segments_intersect(&pt(0, 0), &pt(2, 0), &pt(1, 0), &pt(3, 0)));
}

#[test]
fn polygon_area_doubled_matches_the_shoelace_formula_on_a_random_convex_polygon() {
    let points = common::random_points(30, 1000, 0xC0FFEE);
    let hull = convex_hull(&points);
    if hull.len() >= 3 {
        let area = polygon_area_doubled(&hull);
        assert!(area.to_i128().unwrap() > 0, "a non-degenerate hull must have positive area");
    }
}
