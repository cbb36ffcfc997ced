//! Slice colours.

/// 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours cycled across slices in list order.
pub const PALETTE: [Rgb; 8] = [
    Rgb(0xFF, 0x57, 0x33),
    Rgb(0x33, 0xFF, 0x57),
    Rgb(0x33, 0x57, 0xFF),
    Rgb(0xFF, 0x33, 0xA1),
    Rgb(0x33, 0xFF, 0xF5),
    Rgb(0xF5, 0xFF, 0x33),
    Rgb(0xFF, 0x8C, 0x33),
    Rgb(0x8C, 0x33, 0xFF),
];

pub fn slice_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}
