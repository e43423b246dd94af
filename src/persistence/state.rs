use super::error::StoreError;
use super::keys;
use super::store::KvStore;
use crate::domain::{Mode, TimerState, TodoItem, TodoList, DEFAULT_REST_MINUTES, DEFAULT_WORK_MINUTES};
use std::str::FromStr;

fn read_parsed<T: FromStr>(store: &impl KvStore, key: &str) -> Option<T> {
    store.get(key)?.trim().parse().ok()
}

fn read_minutes(store: &impl KvStore, key: &str, default: u32) -> u32 {
    let minutes: Option<u32> = read_parsed(store, key);
    match minutes {
        Some(minutes) if minutes > 0 => minutes,
        _ => default,
    }
}

/// Load the timer from the store as it was last written.
///
/// Every key falls back to its default when missing or unparseable. No
/// catch-up is applied here; see [`TimerState::catch_up`].
pub fn load_timer(store: &impl KvStore) -> TimerState {
    let work_minutes = read_minutes(store, keys::WORK_DEFAULT, DEFAULT_WORK_MINUTES);
    let rest_minutes = read_minutes(store, keys::REST_DEFAULT, DEFAULT_REST_MINUTES);
    let running = store.get(keys::RUNNING).as_deref().map(str::trim) == Some("true");

    TimerState {
        mode: store
            .get(keys::MODE)
            .and_then(|tag| Mode::from_tag(&tag))
            .unwrap_or(Mode::Work),
        remaining_work: read_parsed(store, keys::REMAINING_WORK)
            .unwrap_or(u64::from(work_minutes) * 60),
        remaining_rest: read_parsed(store, keys::REMAINING_REST)
            .unwrap_or(u64::from(rest_minutes) * 60),
        work_minutes,
        rest_minutes,
        running,
        elapsed: read_parsed(store, keys::ELAPSED).unwrap_or(0),
        last_tick_ms: if running {
            read_parsed(store, keys::LAST_TICK)
        } else {
            None
        },
        total_work_secs: read_parsed(store, keys::TOTAL_WORK_SECONDS).unwrap_or(0),
    }
}

/// Write every timer key in one store update. The last-tick key is removed
/// whenever the timer is not running.
pub fn save_timer(store: &mut impl KvStore, timer: &TimerState) -> Result<(), StoreError> {
    let last_tick = if timer.running {
        timer.last_tick_ms.map(|ms| ms.to_string())
    } else {
        None
    };

    store.apply(vec![
        (keys::WORK_DEFAULT, Some(timer.work_minutes.to_string())),
        (keys::REST_DEFAULT, Some(timer.rest_minutes.to_string())),
        (keys::TOTAL_WORK_SECONDS, Some(timer.total_work_secs.to_string())),
        (keys::MODE, Some(timer.mode.to_tag().to_string())),
        (keys::REMAINING_WORK, Some(timer.remaining_work.to_string())),
        (keys::REMAINING_REST, Some(timer.remaining_rest.to_string())),
        (keys::RUNNING, Some(timer.running.to_string())),
        (keys::ELAPSED, Some(timer.elapsed.to_string())),
        (keys::LAST_TICK, last_tick),
    ])
}

/// Load the todo list; a corrupt list is logged and replaced by an empty one
pub fn load_todos(store: &impl KvStore) -> TodoList {
    let Some(json) = store.get(keys::TODOS) else {
        return TodoList::default();
    };

    match serde_json::from_str::<Vec<TodoItem>>(&json) {
        Ok(items) => TodoList::new(items),
        Err(e) => {
            tracing::warn!(error = %e, "stored todo list is corrupt, starting empty");
            TodoList::default()
        }
    }
}

/// Write the whole todo list
pub fn save_todos(store: &mut impl KvStore, todos: &TodoList) -> Result<(), StoreError> {
    let json = serde_json::to_string(todos)?;
    store.set(keys::TODOS, json)
}
