mod common;

use exactgeom::delaunay::Delaunay;
use exactgeom::point::{is_in_circumcircle, Point};

fn pt(x: i128, y: i128) -> Point {
    Point::new(x, y, 40)
}

#[test]
fn four_cocircular_free_points_triangulate_into_two_triangles() {
    let points = vec![pt(0, 0), pt(4, 0), pt(4, 4), pt(0, 4)];
    let d = Delaunay::triangulate(&points);
    assert_eq!(d.finite_faces().len(), 2);
}

#[test]
fn every_face_in_a_random_point_cloud_satisfies_the_empty_circumcircle_property() {
    let points = common::random_points(40, 500, 42);
    let d = Delaunay::triangulate_shuffled(&points, 0xA5A5);
    let faces = d.finite_faces();
    assert!(!faces.is_empty());
    for face in &faces {
        let corners = d.corners(*face);
        for other in &faces {
            for q in d.corners(*other) {
                if q == corners[0] || q == corners[1] || q == corners[2] {
                    continue;
                }
                assert!(
                    is_in_circumcircle(corners[0], corners[1], corners[2], q) <= 0,
                    "Delaunay condition violated"
                );
            }
        }
    }
}

#[test]
fn triangulation_covers_every_input_point_as_some_face_corner() {
    let points = common::random_points(25, 200, 7);
    let d = Delaunay::triangulate(&points);
    let faces = d.finite_faces();
    for p in &points {
        let used = faces.iter().any(|&f| d.corners(f).iter().any(|c| *c == p));
        assert!(used, "every input point should appear in at least one finite face");
    }
}

#[test]
fn insertion_order_does_not_change_the_resulting_triangle_count() {
    let points = vec![pt(0, 0), pt(6, 0), pt(6, 6), pt(0, 6), pt(3, 3), pt(1, 5), pt(5, 1)];
    let a = Delaunay::triangulate(&points);
    let b = Delaunay::triangulate_shuffled(&points, 999);
    assert_eq!(a.finite_faces().len(), b.finite_faces().len());
}
