// Card layout
pub const DEFAULT_OPTIONS: [u32; 2] = [1, 5];
pub const MAX_COMBINATIONS: usize = 1_000_000;

// Simulation scheduling
pub const DEFAULT_CHUNK_SIZE: u64 = 1_000;
pub const DEFAULT_SIMULATION_TRIES: u64 = 100_000;

// Waited-value analysis (2 options / 3 rows payout table)
pub const WAITED_VALUE_EXPECTED: f64 = 4.485;
pub const WAITED_VALUE_ERROR_MARGIN: f64 = 0.05;
