use crate::time::Time;

/// What a plane is queued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Landing,
    Takeoff,
}

/// A plane is known only by the minute it joined its queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plane {
    pub arrival: Time,
}

impl Plane {
    pub fn arrived_at(arrival: Time) -> Self {
        Plane { arrival }
    }

    pub fn wait_at(&self, now: Time) -> u64 {
        now.since(self.arrival)
    }
}
