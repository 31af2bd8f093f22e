use super::*;

#[test]
fn kernel_sums_to_one_and_is_symmetric() {
    let k = gaussian_kernel_q16(6, 2.0).unwrap();
    assert_eq!(k.len(), 13);
    assert_eq!(k.iter().map(|&w| u64::from(w)).sum::<u64>(), 65536);
    for i in 0..6 {
        assert_eq!(k[i], k[12 - i]);
    }
    assert_eq!(gaussian_kernel_q16(0, 0.0).unwrap(), vec![65536]);
    assert!(gaussian_kernel_q16(3, f32::NAN).is_err());
}

#[test]
fn flat_images_are_fixed_points() {
    let mut data = [90u8, 60, 30, 255].repeat(16 * 8);
    let before = data.clone();
    blur_in_place(&mut data, 16, 8, 2.5).unwrap();
    assert_eq!(data, before);
}

#[test]
fn zero_sigma_is_identity() {
    let mut data: Vec<u8> = (0..64u8).collect();
    let before = data.clone();
    blur_in_place(&mut data, 4, 4, 0.0).unwrap();
    assert_eq!(data, before);
}

#[test]
fn spreads_a_single_bright_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut data = vec![0u8; (w * h * 4) as usize];
    let c = ((4 * w + 4) * 4) as usize;
    data[c..c + 4].copy_from_slice(&[255, 255, 255, 255]);
    blur_in_place(&mut data, w, h, 1.0).unwrap();
    assert!(data[c + 3] < 255);
    let right = c + 4;
    assert!(data[right + 3] > 0);
}
