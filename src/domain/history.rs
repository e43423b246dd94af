/// Seconds of completed deep work represented by one block
pub const BLOCK_SECONDS: u64 = 15 * 60;
/// Total number of blocks in the grid
pub const CAPACITY: usize = 400;
/// Blocks per grid row
pub const COLUMNS: usize = 40;

/// Number of filled blocks for a cumulative total, capped at capacity
pub fn filled_blocks(total_work_secs: u64) -> usize {
    let blocks = total_work_secs / BLOCK_SECONDS;
    usize::try_from(blocks).unwrap_or(usize::MAX).min(CAPACITY)
}

/// Whole minutes of completed deep work
pub fn total_minutes(total_work_secs: u64) -> u64 {
    total_work_secs / 60
}

/// Grid rows, each a run of filled/empty flags, filled blocks first
pub fn history_rows(total_work_secs: u64) -> Vec<Vec<bool>> {
    let filled = filled_blocks(total_work_secs);
    (0..CAPACITY)
        .map(|i| i < filled)
        .collect::<Vec<_>>()
        .chunks(COLUMNS)
        .map(|row| row.to_vec())
        .collect()
}
