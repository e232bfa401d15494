//! Core game constants
//!
//! Display glyphs for the tile alphabet and the default movement
//! key bindings.

/// Map symbols
pub const S_OPEN: char = '-';
pub const S_PILLAR: char = '+';
pub const S_PLAYER: char = 'o';
pub const S_MONSTER: char = 'M';
pub const S_TREASURE: char = '$';
pub const S_AMULET: char = '@';
pub const S_DOOR: char = '?';
pub const S_EXIT: char = '!';

/// Movement keys
pub const KEY_UP: char = 'w';
pub const KEY_DOWN: char = 's';
pub const KEY_LEFT: char = 'a';
pub const KEY_RIGHT: char = 'd';

/// Minimum treasure required to step onto the exit
pub const EXIT_TREASURE_REQUIRED: u32 = 1;
