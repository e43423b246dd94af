pub mod error;
pub mod files;
pub mod keys;
pub mod state;
pub mod store;

pub use files::{ensure_depot_dir, init_local_depot, logs_dir, state_file};
pub use state::{load_timer, load_todos, save_timer, save_todos};
pub use store::{FileStore, KvStore};
#[cfg(test)]
pub use store::MemoryStore;
