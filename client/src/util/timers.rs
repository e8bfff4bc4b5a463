//! Scheduler backed by `setTimeout`.
//!
//! Every task owns one `gloo_timers` [`Timeout`]; dropping it clears the
//! browser timer, which is how cancellation works. Entries are swept once
//! their task has finished, never while it is still running, so a task may
//! schedule or cancel other tasks.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use page_switcher::{Scheduler, Task, TaskId};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Armed,
    Running,
    Done,
}

struct Armed {
    // Held only so dropping it cancels the timer.
    _timeout: Timeout,
    phase: Rc<Cell<Phase>>,
}

#[derive(Default)]
pub struct TimeoutScheduler {
    next_id: Cell<u64>,
    armed: RefCell<HashMap<TaskId, Armed>>,
}

impl TimeoutScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn sweep(&self) {
        self.armed
            .borrow_mut()
            .retain(|_, armed| armed.phase.get() != Phase::Done);
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskId {
        self.sweep();
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let phase = Rc::new(Cell::new(Phase::Armed));
        let task_phase = Rc::clone(&phase);
        let timeout = Timeout::new(millis, move || {
            task_phase.set(Phase::Running);
            task();
            task_phase.set(Phase::Done);
        });
        self.armed
            .borrow_mut()
            .insert(id, Armed { _timeout: timeout, phase });
        id
    }

    fn cancel(&self, id: TaskId) -> bool {
        let mut armed = self.armed.borrow_mut();
        let pending = armed
            .get(&id)
            .is_some_and(|entry| entry.phase.get() == Phase::Armed);
        if pending {
            armed.remove(&id);
        }
        pending
    }
}
