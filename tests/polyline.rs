use decasteljau::{polyline, Line, Vector};

#[test]
fn connects_adjacent_pairs_in_order() {
    let points = vec![
        Vector::from_components(0., 0.),
        Vector::from_components(1., 0.),
        Vector::from_components(1., 1.),
    ];

    let lines = polyline::connect(&points);

    assert_eq!(
        lines,
        vec![
            Line::from_points(points[0], points[1]),
            Line::from_points(points[1], points[2]),
        ]
    );
}

#[test]
fn segment_count_is_one_less_than_point_count() {
    for m in 2..10 {
        let points: Vec<Vector> = (0..m)
            .map(|i| Vector::from_components(i as f64, (i * i) as f64))
            .collect();
        assert_eq!(polyline::connect(&points).len(), m - 1);
    }
}

#[test]
fn too_few_points_make_no_lines() {
    assert!(polyline::connect(&[]).is_empty());
    assert!(polyline::connect(&[Vector::from_components(3., 4.)]).is_empty());
}

#[test]
fn shares_endpoints_between_consecutive_lines() {
    let points = vec![
        Vector::from_components(0., 0.),
        Vector::from_components(2., 5.),
        Vector::from_components(-1., 3.),
        Vector::from_components(4., 4.),
    ];

    let lines = polyline::connect(&points);
    for pair in lines.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn length_sums_segment_lengths() {
    let points = vec![
        Vector::from_components(0., 0.),
        Vector::from_components(3., 4.),
        Vector::from_components(3., 14.),
    ];

    assert_eq!(polyline::length(&points), 15.);
    assert_eq!(polyline::length(&points[..1]), 0.);
}
