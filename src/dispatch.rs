/// Single-slot handoff between the timer interrupt and the refresh
/// worker. At most one request is ever pending; submitting on top of a
/// pending request coalesces into it. Must be accessed under the same
/// lock discipline as the counter state.
pub struct WorkSlot {
    pending: bool,
}

impl WorkSlot {
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Arms the slot. Returns true if the slot was empty and the
    /// worker should be woken, false if a request was already pending.
    pub fn submit(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Empties the slot. Returns true if a request was pending.
    pub fn drain(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_submit_arms_the_slot() {
        let mut slot = WorkSlot::new();
        assert!(slot.submit());
        assert!(slot.drain());
    }

    #[test]
    fn submissions_coalesce_until_drained() {
        let mut slot = WorkSlot::new();
        assert!(slot.submit());
        assert!(!slot.submit());
        assert!(!slot.submit());

        // Three submissions, one serviced request.
        assert!(slot.drain());
        assert!(!slot.drain());
    }

    #[test]
    fn drain_on_empty_slot_reports_nothing_pending() {
        let mut slot = WorkSlot::new();
        assert!(!slot.drain());
    }

    #[test]
    fn slot_rearms_after_drain() {
        let mut slot = WorkSlot::new();
        assert!(slot.submit());
        assert!(slot.drain());
        assert!(slot.submit());
        assert!(slot.drain());
    }
}
