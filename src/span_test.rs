use super::*;

fn p(x: u8, y: u8, z: u8) -> Point {
    Point::new(x, y, z)
}

#[test]
fn contains_respects_bounds() {
    let s = Span::new(1, p(2, 2, 2), p(5, 5, 5));
    assert!(s.contains(p(2, 2, 2)));
    assert!(s.contains(p(5, 5, 5)));
    assert!(s.contains(p(3, 4, 5)));
    assert!(!s.contains(p(1, 2, 2)));
    assert!(!s.contains(p(6, 5, 5)));
}

#[test]
fn intersects_detects_overlap_and_disjoint() {
    let a = Span::new(1, p(0, 0, 0), p(5, 5, 5));
    let b = Span::new(1, p(5, 5, 5), p(8, 8, 8));
    let c = Span::new(1, p(6, 6, 6), p(8, 8, 8));
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
}

#[test]
fn can_merge_requires_matching_face_and_id() {
    let a = Span::new(1, p(0, 0, 0), p(5, 5, 5));
    let adjacent_same_id = Span::new(1, p(6, 0, 0), p(9, 5, 5));
    let adjacent_diff_id = Span::new(2, p(6, 0, 0), p(9, 5, 5));
    let partial_face = Span::new(1, p(6, 0, 0), p(9, 3, 5));
    let edge_only = Span::new(1, p(6, 6, 0), p(9, 9, 5));
    assert!(a.can_merge(&adjacent_same_id));
    assert!(!a.can_merge(&adjacent_diff_id));
    assert!(!a.can_merge(&partial_face));
    assert!(!a.can_merge(&edge_only));
}

#[test]
fn merge_expands_bounds_in_place() {
    let mut a = Span::new(1, p(0, 0, 0), p(5, 5, 5));
    let b = Span::new(1, p(6, 0, 0), p(9, 5, 5));
    a.merge(&b);
    assert_eq!(a.start(), p(0, 0, 0));
    assert_eq!(a.end(), p(9, 5, 5));
}

#[test]
fn expand_clamps_to_chunk_bounds() {
    let a = Span::new(1, p(0, 0, 0), p(15, 15, 15));
    let grown = a.expand();
    assert_eq!(grown.start(), p(0, 0, 0));
    assert_eq!(grown.end(), p(15, 15, 15));
    let b = Span::new(1, p(3, 3, 3), p(5, 5, 5));
    let grown = b.expand();
    assert_eq!(grown.start(), p(2, 2, 2));
    assert_eq!(grown.end(), p(6, 6, 6));
}

#[test]
fn split_center_cell_out_of_full_chunk_yields_six() {
    let whole = Span::new(1, p(0, 0, 0), p(15, 15, 15));
    let hole = Span::new(0, p(7, 7, 7), p(7, 7, 7));
    let parts = whole.split(&hole);
    assert_eq!(parts.len(), 6);
    for part in &parts {
        assert_eq!(part.id, 1);
        assert!(!part.contains(p(7, 7, 7)));
    }
}

#[test]
fn split_exact_cover_yields_no_remainder() {
    let a = Span::new(1, p(2, 2, 2), p(4, 4, 4));
    let exact = Span::new(1, p(2, 2, 2), p(4, 4, 4));
    assert!(a.split(&exact).is_empty());
}

#[test]
fn split_partitions_without_overlap() {
    let whole = Span::new(1, p(0, 0, 0), p(3, 3, 3));
    let writer = Span::new(2, p(1, 1, 1), p(2, 2, 2));
    let parts = whole.split(&writer);
    for i in 0..parts.len() {
        for j in (i + 1)..parts.len() {
            assert!(!parts[i].intersects(&parts[j]), "parts overlap");
        }
    }
    let mut covered: u32 = 0;
    for x in 0..4u8 {
        for y in 0..4u8 {
            for z in 0..4u8 {
                let cell = p(x, y, z);
                if writer.contains(cell) {
                    continue;
                }
                let hits = parts.iter().filter(|s| s.contains(cell)).count();
                assert_eq!(hits, 1, "cell {cell:?} covered {hits} times");
                covered += 1;
            }
        }
    }
    assert_eq!(covered, 64 - 8);
}

#[test]
fn compare_orders_by_x_then_z_then_y() {
    let a = Span::new(1, p(1, 5, 5), p(1, 5, 5));
    let b = Span::new(1, p(1, 5, 6), p(1, 5, 6));
    let equal = Span::new(1, p(1, 5, 5), p(1, 5, 5));
    assert_eq!(a.compare(&b), Ordering3::Before);
    assert_eq!(b.compare(&a), Ordering3::After);
    assert_eq!(a.compare(&equal), Ordering3::Overlap);
}

#[test]
fn new_sets_all_faces_visible() {
    let s = Span::new(1, p(0, 0, 0), p(1, 1, 1));
    for face in Face::ALL {
        assert!(s.visible(face));
    }
}

#[test]
fn set_visible_toggles_single_bit() {
    let mut s = Span::new(1, p(0, 0, 0), p(1, 1, 1));
    s.set_visible(Face::Up, false);
    assert!(!s.visible(Face::Up));
    assert!(s.visible(Face::Down));
}
