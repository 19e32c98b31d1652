//! Constants shared by the search and its demonstration entry point

/// Sentinel index reported when a target is absent
pub const NOT_FOUND: isize = -1;

/// Sequence searched by the demonstration entry point
pub const DEMO_SEQUENCE: [i32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Target searched by the demonstration entry point
pub const DEMO_TARGET: i32 = 5;
