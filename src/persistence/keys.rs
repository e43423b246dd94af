//! Key names of the persisted map. The "dw:" prefix keeps them apart from
//! anything else sharing the store file.

pub const WORK_DEFAULT: &str = "dw:deepDefault";
pub const REST_DEFAULT: &str = "dw:restDefault";
pub const TOTAL_WORK_SECONDS: &str = "dw:totalDeepSeconds";
pub const MODE: &str = "dw:mode";
pub const REMAINING_WORK: &str = "dw:remainingDeep";
pub const REMAINING_REST: &str = "dw:remainingRest";
pub const RUNNING: &str = "dw:running";
pub const ELAPSED: &str = "dw:elapsed";
pub const LAST_TICK: &str = "dw:lastTick";
pub const TODOS: &str = "dw:todos";
