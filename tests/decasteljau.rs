use decasteljau::consts::SMALL_DISTANCE;
use decasteljau::{bezier, construct, levels, point_at, Element, Vector};

fn cubic_points() -> Vec<Vector> {
    vec![
        Vector::from_components(0., 0.),
        Vector::from_components(0., 100.),
        Vector::from_components(100., 100.),
        Vector::from_components(100., 0.),
    ]
}

#[test]
fn empty_input_constructs_nothing() {
    assert!(construct(&[], 0.5).is_empty());
    assert!(levels(&[], 0.5).is_empty());
    assert_eq!(point_at(&[], 0.5), None);
}

#[test]
fn single_point_is_its_own_terminal() {
    let p = Vector::from_components(4., 2.);

    let elements = construct(&[p], 0.3);
    assert_eq!(elements, vec![Element::Point(p)]);

    assert!(levels(&[p], 0.3).is_empty());
    assert_eq!(point_at(&[p], 0.3), Some(p));
}

#[test]
fn level_order_for_a_cubic() {
    let points = cubic_points();
    let elements = construct(&points, 0.5);

    // Three generations of 3, 2, 1 lines with their interpolated points, then
    // the terminal point repeated as the curve point.
    assert_eq!(elements.len(), 6 + 7);

    let kinds: Vec<bool> = elements
        .iter()
        .map(|e| matches!(e, Element::Line(_)))
        .collect();
    let expected = vec![
        true, true, true, false, false, false, // generation of 3
        true, true, false, false, // generation of 2
        true, false, // generation of 1
        false, // terminal curve point
    ];
    assert_eq!(kinds, expected);
}

#[test]
fn first_generation_connects_the_control_polygon() {
    let points = cubic_points();
    let elements = construct(&points, 0.25);

    for i in 0..3 {
        match elements[i] {
            Element::Line(l) => {
                assert_eq!(l.start, points[i]);
                assert_eq!(l.end, points[i + 1]);
            }
            _ => panic!("expected a line at the head of the construction"),
        }
    }
}

#[test]
fn interpolated_points_sit_on_their_lines() {
    let points = cubic_points();
    let u = 0.375;
    let elements = construct(&points, u);

    // Generation of 3: lines at 0..3, their points at 3..6.
    for i in 0..3 {
        let line = match elements[i] {
            Element::Line(l) => l,
            _ => panic!("expected a line"),
        };
        let point = match elements[3 + i] {
            Element::Point(p) => p,
            _ => panic!("expected a point"),
        };
        assert!(point.is_near(line.start.lerp(line.end, u), SMALL_DISTANCE));
    }
}

#[test]
fn segment_counts_sum_over_generations() {
    for degree in 1..8 {
        let points: Vec<Vector> = (0..=degree)
            .map(|i| Vector::from_components(i as f64, ((i * 3) % 5) as f64))
            .collect();

        let elements = construct(&points, 0.5);

        let line_count = elements
            .iter()
            .filter(|e| matches!(e, Element::Line(_)))
            .count();
        let point_count = elements.len() - line_count;

        // n + (n-1) + ... + 1 lines, and one more point than that.
        assert_eq!(line_count, degree * (degree + 1) / 2);
        assert_eq!(point_count, line_count + 1);
    }
}

#[test]
fn terminal_point_matches_bernstein_evaluation() {
    for degree in 1..8 {
        let points: Vec<Vector> = (0..=degree)
            .map(|i| {
                Vector::from_components((i as f64).sin() * 50. + 60., (i as f64).cos() * 40. + 50.)
            })
            .collect();

        for i in 0..=10 {
            let u = i as f64 / 10.;

            let elements = construct(&points, u);
            let terminal = match elements.last().unwrap() {
                Element::Point(p) => *p,
                _ => panic!("construction must end in a point"),
            };

            let direct = bezier::evaluate(&points, u).unwrap();
            assert!(terminal.is_near(direct, SMALL_DISTANCE));
        }
    }
}

#[test]
fn terminal_point_duplicates_the_last_interpolated_point() {
    let points = cubic_points();
    let elements = construct(&points, 0.7);

    let n = elements.len();
    assert_eq!(elements[n - 1], elements[n - 2]);
}

#[test]
fn levels_shrink_by_one_point_each() {
    let points = cubic_points();
    let generations = levels(&points, 0.5);

    assert_eq!(generations.len(), 3);
    assert_eq!(generations[0].len(), 3);
    assert_eq!(generations[1].len(), 2);
    assert_eq!(generations[2].len(), 1);
}

#[test]
fn point_at_agrees_with_the_full_construction() {
    let points = cubic_points();

    for i in 0..=10 {
        let u = i as f64 / 10.;

        let cheap = point_at(&points, u).unwrap();
        let elements = construct(&points, u);
        match elements.last().unwrap() {
            Element::Point(p) => assert_eq!(*p, cheap),
            _ => panic!("construction must end in a point"),
        }
    }
}

#[test]
fn construction_is_pure_across_calls() {
    let points = cubic_points();

    let first = construct(&points, 0.42);
    let _other = construct(&points, 0.9);
    let second = construct(&points, 0.42);

    assert_eq!(first, second);
}

#[test]
fn kurbo_lowering_keeps_geometry() {
    use decasteljau::KurboElement;

    let points = cubic_points();
    let elements = construct(&points, 0.5);

    for element in &elements {
        match (element, element.to_kurbo(2.)) {
            (Element::Line(l), KurboElement::Line(kl)) => {
                assert_eq!(kl.p0.x, l.start.x);
                assert_eq!(kl.p1.y, l.end.y);
            }
            (Element::Point(p), KurboElement::Circle(c)) => {
                assert_eq!(c.center.x, p.x);
                assert_eq!(c.center.y, p.y);
                assert_eq!(c.radius, 2.);
            }
            _ => panic!("lowering changed the element kind"),
        }
    }
}
