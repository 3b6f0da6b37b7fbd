//! Task Slots
//!
//! At-most-one-in-flight tracking for async UI operations. A caller gets a
//! ticket from `begin`, and its result only counts if `finish` still
//! recognises that ticket.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSlot {
    issued: u64,
    running: Option<TaskTicket>,
}

impl TaskSlot {
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Claim the slot; `None` if something is already in flight
    pub fn begin(&mut self) -> Option<TaskTicket> {
        if self.running.is_some() {
            return None;
        }
        self.issued += 1;
        let ticket = TaskTicket(self.issued);
        self.running = Some(ticket);
        Some(ticket)
    }

    /// Release the slot. Returns `false` when the ticket was cancelled or
    /// superseded, in which case the result must be discarded.
    pub fn finish(&mut self, ticket: TaskTicket) -> bool {
        if self.running == Some(ticket) {
            self.running = None;
            true
        } else {
            false
        }
    }

    /// Drop the outstanding ticket, if any
    pub fn cancel(&mut self) -> bool {
        self.running.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_in_flight() {
        let mut slot = TaskSlot::default();
        let ticket = slot.begin().unwrap();
        assert!(slot.is_running());
        assert!(slot.begin().is_none());

        assert!(slot.finish(ticket));
        assert!(!slot.is_running());
        assert!(slot.begin().is_some());
    }

    #[test]
    fn test_cancelled_ticket_is_stale() {
        let mut slot = TaskSlot::default();
        let old = slot.begin().unwrap();
        assert!(slot.cancel());
        assert!(!slot.is_running());

        let new = slot.begin().unwrap();
        assert_ne!(old, new);
        assert!(!slot.finish(old));
        assert!(slot.is_running());
        assert!(slot.finish(new));
    }

    #[test]
    fn test_cancel_idle_slot() {
        let mut slot = TaskSlot::default();
        assert!(!slot.cancel());
    }
}
