//! Named timer registry for a terminal session.
//!
//! Every pending timer is keyed by its purpose ([`TaskKey`]), so a single
//! registry can cancel one effect group or tear down everything at once.
//! Time is an abstract millisecond counter that only moves when the driver
//! asks it to; nothing here sleeps or blocks.

use crate::session::state::Overlay;

/// Milliseconds since the session started.
pub type Millis = u64;

/// Purpose of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Narrative step advance (repeating)
    Tick,
    /// Cursor blink (repeating)
    Blink,
    /// Loading dots cycle (repeating)
    Dots,
    /// Fake package install progress (repeating)
    InstallTick,
    /// Auto-clear of an overlay flag (one-shot)
    OverlayClear(Overlay),
    /// Matrix overlay activation after `git blame santa` (one-shot)
    MatrixOn,
    /// A delayed output line, identified by its payload slot (one-shot)
    DelayedLine(u64),
}

#[derive(Debug, Clone)]
struct Task {
    key: TaskKey,
    due: Millis,
    every: Option<Millis>,
    seq: u64,
}

/// Registry of pending one-shot and repeating tasks.
///
/// Tasks fire in order of due time; tasks due at the same instant fire in
/// the order they were (re)scheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Millis,
    next_seq: u64,
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Schedule `key` to fire once, `delay` ms from now.
    ///
    /// Replaces any pending task with the same key.
    pub fn schedule_once(&mut self, key: TaskKey, delay: Millis) {
        self.insert(key, self.now + delay, None);
    }

    /// Schedule `key` to fire every `interval` ms, first firing one interval from now.
    ///
    /// Replaces any pending task with the same key.
    pub fn schedule_every(&mut self, key: TaskKey, interval: Millis) {
        let interval = interval.max(1);
        self.insert(key, self.now + interval, Some(interval));
    }

    /// Cancel a pending task. Returns true if something was cancelled.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.key != key);
        self.tasks.len() != before
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    pub fn is_scheduled(&self, key: TaskKey) -> bool {
        self.tasks.iter().any(|t| t.key == key)
    }

    /// Number of pending tasks.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Millis> {
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Pop the earliest task due at or before `until`.
    ///
    /// Moves the clock to the task's due time. Repeating tasks are
    /// rescheduled one interval later before being returned, so the caller
    /// may cancel them while handling the firing.
    pub fn pop_due(&mut self, until: Millis) -> Option<TaskKey> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;

        let task = self.tasks.swap_remove(idx);
        self.now = self.now.max(task.due);

        if let Some(every) = task.every {
            self.insert(task.key, task.due + every, Some(every));
        }

        Some(task.key)
    }

    /// Move the clock forward without firing anything.
    ///
    /// Callers drain [`pop_due`](Self::pop_due) first; the clock never goes back.
    pub fn set_now(&mut self, now: Millis) {
        self.now = self.now.max(now);
    }

    fn insert(&mut self, key: TaskKey, due: Millis, every: Option<Millis>) {
        self.tasks.retain(|t| t.key != key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(Task {
            key,
            due,
            every,
            seq,
        });
    }
}
