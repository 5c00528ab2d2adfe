pub const NUM_PITS: usize = 14;
pub const PITS_PER_SIDE: usize = 6;
pub const STORE_A: usize = 6;
pub const STORE_B: usize = 13;

pub type Stones = [u32; NUM_PITS];

pub const INITIAL_STONES: Stones = [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0];
