//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::PackedColour;

/// Unpacks `0x00RRGGBB` pixels into RGBA bytes with alpha 255.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn copy_packed_to_rgba(src: &[PackedColour], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (&packed, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let [_, r, g, b] = packed.to_be_bytes();

        dst_pixel[0] = r;
        dst_pixel[1] = g;
        dst_pixel[2] = b;
        dst_pixel[3] = 255;
    }
}

/// Unpacks `0x00RRGGBB` pixels into tightly packed RGB bytes.
#[must_use]
pub fn packed_to_rgb_bytes(src: &[PackedColour]) -> Vec<u8> {
    src.iter()
        .flat_map(|packed| {
            let [_, r, g, b] = packed.to_be_bytes();
            [r, g, b]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_packed_to_rgba_known_values() {
        let src = vec![
            0x00FF_0000, // red
            0x0000_FF00, // green
            0x0000_00FF, // blue
            0x00FF_FFFF, // white
        ];
        let mut dst = vec![0; src.len() * 4];

        copy_packed_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_packed_to_rgba_empty_buffers() {
        let src: Vec<PackedColour> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_packed_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn test_copy_packed_to_rgba_ignores_upper_byte() {
        let src = vec![0xAB80_4020];
        let mut dst = vec![0; 4];

        copy_packed_to_rgba(&src, &mut dst);

        assert_eq!(dst, vec![128, 64, 32, 255]);
    }

    #[test]
    #[should_panic(expected = "dst length 3 does not match expected 4")]
    fn test_copy_packed_to_rgba_rejects_wrong_length() {
        let mut dst = vec![0; 3];

        copy_packed_to_rgba(&[0x0010_2030], &mut dst);
    }

    #[test]
    fn test_packed_to_rgb_bytes() {
        let src = vec![0x000A_141E, 0x0028_323C];

        assert_eq!(packed_to_rgb_bytes(&src), vec![10, 20, 30, 40, 50, 60]);
    }
}
