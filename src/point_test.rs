use super::*;

#[test]
fn pack_matches_shift_mask() {
    let p = Point::new(5, 9, 2);
    assert_eq!(p.pack(), (5u16 << 8) | (9u16 << 4) | 2u16);
}

#[test]
fn pack_corners() {
    assert_eq!(Point::new(0, 0, 0).pack(), 0);
    assert_eq!(Point::new(15, 15, 15).pack(), 0x0fff);
}

#[test]
fn try_new_rejects_out_of_range() {
    assert_eq!(Point::try_new(16, 0, 0), Err(ChunkError::OutOfRange(16)));
    assert_eq!(Point::try_new(0, 16, 0), Err(ChunkError::OutOfRange(16)));
    assert_eq!(Point::try_new(0, 0, 16), Err(ChunkError::OutOfRange(16)));
    assert!(Point::try_new(15, 15, 15).is_ok());
}

#[test]
fn equality_is_componentwise() {
    assert_eq!(Point::new(1, 2, 3), Point::new(1, 2, 3));
    assert_ne!(Point::new(1, 2, 3), Point::new(3, 2, 1));
}

#[test]
fn min_max() {
    let a = Point::new(1, 9, 4);
    let b = Point::new(5, 2, 4);
    assert_eq!(a.min(&b), Point::new(1, 2, 4));
    assert_eq!(a.max(&b), Point::new(5, 9, 4));
}
