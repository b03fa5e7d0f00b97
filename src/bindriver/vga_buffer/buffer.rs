pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

use volatile::Volatile;

pub struct Buffer {
    pub chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: super::helper::ColorCode,
}

use static_assertions::assert_eq_size;

// one cell is a (character, attribute) pair, one screen is 25 rows of 160 bytes
assert_eq_size!(ScreenChar, [u8; 2]);
assert_eq_size!(Buffer, [u8; 2 * BUFFER_WIDTH * BUFFER_HEIGHT]);
