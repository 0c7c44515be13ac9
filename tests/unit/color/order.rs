use super::*;

fn offsets<O: ChannelOrder>() -> Vec<usize> {
    let mut v = vec![O::R, O::G, O::B];
    v.extend(O::A);
    v.extend(O::PAD);
    v
}

fn assert_valid<O: ChannelOrder>() {
    let v = offsets::<O>();
    assert_eq!(v.len(), O::ELEMENTS, "{:?} leaves a slot unassigned", O::default());
    for (i, a) in v.iter().enumerate() {
        assert!(*a < O::ELEMENTS);
        for b in &v[i + 1..] {
            assert_ne!(a, b, "{:?} repeats offset {a}", O::default());
        }
    }
}

#[test]
fn predefined_orders_have_distinct_offsets() {
    assert_valid::<OrderRgb>();
    assert_valid::<OrderBgr>();
    assert_valid::<OrderRgba>();
    assert_valid::<OrderArgb>();
    assert_valid::<OrderAbgr>();
    assert_valid::<OrderBgra>();
    assert_valid::<OrderRgbx>();
    assert_valid::<OrderXrgb>();
    assert_valid::<OrderBgrx>();
    assert_valid::<OrderXbgr>();
}

#[test]
fn read_maps_roles() {
    let px = [10u8, 20, 30, 40];
    assert_eq!(OrderRgba::read(&px), [10, 20, 30, 40]);
    assert_eq!(OrderBgra::read(&px), [30, 20, 10, 40]);
    assert_eq!(OrderArgb::read(&px), [20, 30, 40, 10]);
    assert_eq!(OrderAbgr::read(&px), [40, 30, 20, 10]);
}

#[test]
fn layouts_without_alpha_read_opaque() {
    assert_eq!(OrderRgb::read(&[1u8, 2, 3]), [1, 2, 3, 255]);
    assert_eq!(OrderXrgb::read(&[0u16, 1, 2, 3]), [1, 2, 3, u16::MAX]);
}

#[test]
fn write_fills_padding_and_drops_alpha() {
    let mut px = [0u8; 4];
    OrderXbgr::write(&mut px, [1, 2, 3, 9]);
    assert_eq!(px, [255, 3, 2, 1]);

    let mut px = [0u8; 3];
    OrderBgr::write(&mut px, [1, 2, 3, 9]);
    assert_eq!(px, [3, 2, 1]);

    let mut px = [0.0f32; 4];
    OrderArgb::write(&mut px, [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(px, [0.4, 0.1, 0.2, 0.3]);
}
