//! Deterministic category colors.
//!
//! Categories are free-form strings, so display colors are assigned by
//! hashing the name into a fixed ten-color palette. The hash is the
//! classic polynomial rolling hash (`hash = code + ((hash << 5) - hash)`)
//! over UTF-16 code units with 32-bit two's-complement wraparound, so the
//! same category maps to the same color on every platform.

/// The fixed display palette.
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7",
    "#DDA0DD", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E9",
];

/// Map a category name to one of the palette colors. Pure and total.
pub fn color_for(category: &str) -> &'static str {
    let mut hash: i32 = 0;
    for unit in category.encode_utf16() {
        hash = (unit as i32).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    PALETTE[hash.unsigned_abs() as usize % PALETTE.len()]
}
