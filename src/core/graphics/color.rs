//=========================================================================
// Color
//=========================================================================

/// RGBA color with 8 bits per channel.
///
/// Alpha is opaque (255) unless set explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs into `0x00RRGGBB`, the framebuffer pixel layout.
    pub const fn to_xrgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks a `0x00RRGGBB` framebuffer pixel (alpha is opaque).
    pub const fn from_xrgb(pixel: u32) -> Self {
        Self::rgb((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
    }

    /// Source-over blend of `self` onto an opaque `dst` pixel.
    pub fn blend_over(self, dst: u32) -> u32 {
        match self.a {
            255 => self.to_xrgb(),
            0 => dst,
            alpha => {
                let dst = Color::from_xrgb(dst);
                let mix = |src: u8, dst: u8| -> u8 {
                    let a = alpha as u32;
                    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
                };
                Color::rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b)).to_xrgb()
            }
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::RED, Color::rgba(255, 0, 0, 255));
    }

    #[test]
    fn xrgb_packing() {
        let color = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(color.to_xrgb(), 0x0012_3456);
        assert_eq!(Color::from_xrgb(0x0012_3456), color);
    }

    #[test]
    fn blend_over_respects_alpha_extremes() {
        let dst = Color::BLUE.to_xrgb();
        assert_eq!(Color::rgba(255, 0, 0, 255).blend_over(dst), Color::RED.to_xrgb());
        assert_eq!(Color::rgba(255, 0, 0, 0).blend_over(dst), dst);
    }

    #[test]
    fn blend_over_mixes_half_alpha() {
        let blended = Color::from_xrgb(Color::rgba(255, 255, 255, 128).blend_over(0));
        assert_eq!(blended, Color::rgb(128, 128, 128));
    }
}
