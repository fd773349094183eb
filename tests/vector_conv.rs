use decasteljau::{Line, Vector};

#[test]
fn conv() {
    let mut v = Vector::from_components(0.0, 100.0);
    v[1] = 50.0;
    v *= 10.0;
    v[0] = v[0] - v[1];
    assert_eq!(v.x, -500.0);
    assert_eq!(v.y, 500.0);
}

#[test]
fn tuples_and_arrays() {
    let v: Vector = (3.0, 4.0).into();
    assert_eq!(v, Vector::from_components(3.0, 4.0));
    assert_eq!(v.magnitude(), 5.0);

    let pair: (f64, f64) = v.into();
    assert_eq!(pair, (3.0, 4.0));

    let w: Vector = [1.0, 2.0].into();
    let arr: [f64; 2] = w.into();
    assert_eq!(arr, [1.0, 2.0]);
}

#[test]
fn operators() {
    let a = Vector::from_components(1.0, 2.0);
    let b = Vector::from_components(3.0, -4.0);

    assert_eq!(a + b, Vector::from_components(4.0, -2.0));
    assert_eq!(a - b, Vector::from_components(-2.0, 6.0));
    assert_eq!(a * 2.0, Vector::from_components(2.0, 4.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a / 2.0, Vector::from_components(0.5, 1.0));
    assert_eq!(-a, Vector::from_components(-1.0, -2.0));
    assert_eq!(a * b, Vector::from_components(3.0, -8.0));
    assert_eq!(a.dot(b), -5.0);
}

#[test]
fn normalize_makes_unit_length() {
    let v = Vector::from_components(3.0, 4.0).normalize();
    assert!((v.magnitude() - 1.0).abs() < 1e-12);
    assert_eq!(v, Vector::from_components(0.6, 0.8));
}

#[test]
fn kurbo_roundtrip() {
    let v = Vector::from_components(1.5, -2.5);
    let p = v.to_kurbo_point();
    assert_eq!(p.x, 1.5);
    assert_eq!(p.y, -2.5);
    assert_eq!(Vector::from_kurbo_point(&p), v);

    let back: Vector = kurbo::Point::new(7.0, 8.0).into();
    assert_eq!(back, Vector::from_components(7.0, 8.0));
}

#[test]
fn line_kurbo_roundtrip() {
    let line = Line::from_points(
        Vector::from_components(0.0, 1.0),
        Vector::from_components(2.0, 3.0),
    );

    let kl: kurbo::Line = line.into();
    assert_eq!(kl.p0, kurbo::Point::new(0.0, 1.0));
    assert_eq!(kl.p1, kurbo::Point::new(2.0, 3.0));
    assert_eq!(Line::from(kl), line);
}
