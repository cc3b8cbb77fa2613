use gunnery::{Coord, HitCluster, Orientation};

#[test]
fn test_single_hit_has_no_orientation() {
    let mut cluster = HitCluster::new();
    cluster.push(Coord::new(5, 5));
    assert_eq!(cluster.orientation(), None);
}

#[test]
fn test_vertical_inference() {
    let mut cluster = HitCluster::new();
    cluster.push(Coord::new(5, 5));
    cluster.push(Coord::new(6, 5));
    assert_eq!(cluster.orientation(), Some(Orientation::Vertical));
}

#[test]
fn test_horizontal_inference_either_order() {
    let mut cluster = HitCluster::new();
    cluster.push(Coord::new(4, 7));
    cluster.push(Coord::new(4, 6));
    assert_eq!(cluster.orientation(), Some(Orientation::Horizontal));
}

#[test]
fn test_non_collinear_is_unknown() {
    let mut cluster = HitCluster::new();
    cluster.push(Coord::new(5, 5));
    cluster.push(Coord::new(6, 6));
    assert_eq!(cluster.orientation(), None);
}

#[test]
fn test_duplicates_ignored() {
    let mut cluster = HitCluster::new();
    cluster.push(Coord::new(5, 5));
    cluster.push(Coord::new(5, 5));
    assert_eq!(cluster.len(), 1);
}

#[test]
fn test_endpoints_regardless_of_hit_order() {
    let mut cluster = HitCluster::new();
    cluster.push(Coord::new(6, 5));
    cluster.push(Coord::new(5, 5));
    cluster.push(Coord::new(7, 5));

    let (first, last) = cluster.endpoints(Orientation::Vertical);
    assert_eq!(first, Coord::new(5, 5));
    assert_eq!(last, Coord::new(7, 5));
}

#[test]
fn test_clear_empties() {
    let mut cluster = HitCluster::new();
    cluster.push(Coord::new(5, 5));
    cluster.clear();
    assert!(cluster.is_empty());
    assert_eq!(cluster.orientation(), None);
}
