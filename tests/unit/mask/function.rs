use super::*;

#[test]
fn one_component_reads_first_element() {
    assert_eq!(OneComponentMask.calculate(&[128, 255, 0, 64]), 128);
    assert_eq!(OneComponentMask.calculate(&[200]), 200);
    assert_eq!(OneComponentMask.calculate(&[]), 0);
}

#[test]
fn rgb_to_gray_weights() {
    let m = RgbToGrayMask::RGB;
    assert_eq!(m.calculate(&[255, 0, 0]), 76);
    assert_eq!(m.calculate(&[0, 255, 0]), 149);
    assert_eq!(m.calculate(&[0, 0, 255]), 28);
    assert_eq!(m.calculate(&[255, 255, 255]), 255);
    assert_eq!(m.calculate(&[0, 0, 0]), 0);
}

#[test]
fn rgb_to_gray_respects_offsets() {
    assert_eq!(RgbToGrayMask::BGR.calculate(&[255, 0, 0]), 28);
    assert_eq!(RgbToGrayMask::new(1, 2, 3).calculate(&[9, 255, 0, 0]), 76);
}

#[test]
fn rgb_to_gray_short_input_is_zero() {
    assert_eq!(RgbToGrayMask::RGB.calculate(&[255, 255]), 0);
    assert_eq!(RgbToGrayMask::RGB.calculate(&[]), 0);
}

#[test]
fn closures_are_mask_functions() {
    let max = |p: &[u8]| p.iter().copied().max().unwrap_or(0);
    assert_eq!(max.calculate(&[3, 90, 7]), 90);
}
