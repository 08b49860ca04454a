use crate::queue::PlaneQueue;
use crate::runway::RunwayState;
use crate::stats::{Accumulators, Snapshot};
use crate::time::Time;

/// Everything that changes while a run advances.
#[derive(Clone, Debug, Default)]
pub struct SimulationState {
    /// The minute about to be simulated.
    pub clock: Time,
    pub landing_queue: PlaneQueue,
    pub takeoff_queue: PlaneQueue,
    pub runway: RunwayState,
    pub acc: Accumulators,
    pub snapshots: Vec<Snapshot>,
}

impl SimulationState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            minute: self.clock.0,
            clock: self.clock,
            landing_queue: self.landing_queue.len(),
            takeoff_queue: self.takeoff_queue.len(),
            runway: self.runway.code(),
        }
    }
}
