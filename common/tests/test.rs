use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.left(), 2.0);
    assert_eq!(rect.right(), 6.0);
    assert_eq!(rect.top(), 3.0);
    assert_eq!(rect.bottom(), 9.0);
}

#[test]
fn test_default_is_empty_at_origin() {
    let rect = Rectangle::default();
    assert_eq!(rect.left(), 0.0);
    assert_eq!(rect.right(), 0.0);
    assert_eq!(rect.top(), 0.0);
    assert_eq!(rect.bottom(), 0.0);
}

#[test]
fn test_contains_point() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert!(rect.contains_point(2.0, 3.0));
    assert!(rect.contains_point(4.0, 6.0));
    assert!(rect.contains_point(6.0, 9.0));
    assert!(!rect.contains_point(6.1, 3.0));
    assert!(!rect.contains_point(2.0, 9.1));
    assert!(!rect.contains_point(1.9, 3.0));
}

#[test]
fn test_random_inside_stays_in_bounds() {
    let bounds = Rectangle::new(-50.0, -50.0, 100.0, 100.0);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let rect = bounds.random_inside(15.0, 15.0, &mut rng);
        assert!(rect.left() >= bounds.left());
        assert!(rect.top() >= bounds.top());
        assert!(rect.right() <= bounds.right());
        assert!(rect.bottom() <= bounds.bottom());
        assert!(rect.width <= 15.0);
        assert!(rect.height <= 15.0);
    }
}

#[test]
fn test_random_inside_clamps_oversized_request() {
    let bounds = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let rect = bounds.random_inside(100.0, 100.0, &mut rng);
        assert!(rect.width <= bounds.width);
        assert!(rect.height <= bounds.height);
        assert!(rect.right() <= bounds.right());
        assert!(rect.bottom() <= bounds.bottom());
    }
}
