/// Converts a packed `0xRRGGBB` color into linear-ish `[r, g, b]` floats in `[0, 1]`
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [r, g, b]
}

/// Scales a color by a light intensity
pub fn scaled(rgb: [f32; 3], intensity: f32) -> [f32; 3] {
    [rgb[0] * intensity, rgb[1] * intensity, rgb[2] * intensity]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_white() {
        assert_eq!(hex_to_rgb(0xffffff), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hex_to_rgb_ambient_grey() {
        let rgb = hex_to_rgb(0x404040);
        for channel in rgb {
            assert!((channel - 64.0 / 255.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hex_to_rgb_channels() {
        assert_eq!(hex_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb(0x00ff00), [0.0, 1.0, 0.0]);
        assert_eq!(hex_to_rgb(0x0000ff), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_scaled() {
        assert_eq!(scaled([1.0, 0.5, 0.0], 0.2), [0.2, 0.1, 0.0]);
    }
}
