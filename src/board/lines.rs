// Winning triples of the fixed 3x3 board.

pub type Line = [usize; 3];

pub const WIN_LINES: [Line; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

/// Win lines passing through each cell, in the order `place_mark` scans them.
pub static LINES_THROUGH: [&[Line]; 9] = [
    &[[0, 1, 2], [0, 3, 6], [0, 4, 8]],
    &[[0, 1, 2], [1, 4, 7]],
    &[[0, 1, 2], [2, 5, 8], [2, 4, 6]],
    &[[3, 4, 5], [0, 3, 6]],
    &[[0, 4, 8], [1, 4, 7], [2, 4, 6], [3, 4, 5]],
    &[[2, 5, 8], [3, 4, 5]],
    &[[0, 3, 6], [6, 7, 8], [2, 4, 6]],
    &[[1, 4, 7], [6, 7, 8]],
    &[[0, 4, 8], [2, 5, 8], [6, 7, 8]],
];

/// Earliest turn count at which a line can be complete.
pub const MIN_WIN_TURN: usize = 5;
