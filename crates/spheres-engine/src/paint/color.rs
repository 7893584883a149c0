/// Opaque RGB color at 16 bits per channel.
///
/// This is the raw intensity a surface reports for a color string. Fully
/// saturated white is `65535` on every channel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb16 {
    pub const WHITE: Rgb16 = Rgb16::new(u16::MAX, u16::MAX, u16::MAX);
    pub const BLACK: Rgb16 = Rgb16::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Widens 8-bit channels by byte replication, so `0xFF` maps to `0xFFFF`.
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as u16 * 0x101, g as u16 * 0x101, b as u16 * 0x101)
    }

    /// Narrows to 8-bit channels (high byte).
    #[inline]
    pub const fn to_u8(self) -> [u8; 3] {
        [(self.r >> 8) as u8, (self.g >> 8) as u8, (self.b >> 8) as u8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_widening_round_trips() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let c = Rgb16::from_u8(v, v, v);
            assert_eq!(c.to_u8(), [v, v, v]);
        }
    }

    #[test]
    fn full_byte_is_white() {
        assert_eq!(Rgb16::from_u8(255, 255, 255), Rgb16::WHITE);
    }
}
