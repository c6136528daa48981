//! One-shot timers on a virtual millisecond clock
//!
//! Timers fire in (due time, scheduling order) order. There is no
//! cancellation: once armed, a timer fires when the clock reaches it.

use std::collections::BTreeMap;

use crate::messages::Msg;

#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    pending: BTreeMap<(u64, u64), Msg>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Arm a timer delivering `msg` after `delay_ms`
    pub fn schedule(&mut self, delay_ms: u64, msg: Msg) {
        let due = self.now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!(due, label = %msg.label(), "timer armed");
        self.pending.insert((due, seq), msg);
    }

    /// Earliest timer due at or before `until`, moving the clock to its due time
    pub fn pop_due(&mut self, until: u64) -> Option<(u64, Msg)> {
        let (&(due, seq), _) = self.pending.first_key_value()?;
        if due > until {
            return None;
        }
        let msg = self.pending.remove(&(due, seq))?;
        self.now_ms = self.now_ms.max(due);
        Some((due, msg))
    }

    /// Move the clock forward without firing anything
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
