use crate::plane::Plane;
use std::collections::VecDeque;

/// Unbounded FIFO of waiting planes, head is the earliest arrival.
#[derive(Debug, Default, Clone)]
pub struct PlaneQueue {
    planes: VecDeque<Plane>,
}

impl PlaneQueue {
    pub fn enqueue(&mut self, plane: Plane) {
        debug_assert!(
            self.planes
                .back()
                .map_or(true, |last| last.arrival <= plane.arrival),
            "planes must be enqueued in arrival order"
        );
        self.planes.push_back(plane);
    }

    pub fn dequeue(&mut self) -> Option<Plane> {
        self.planes.pop_front()
    }

    pub fn peek(&self) -> Option<&Plane> {
        self.planes.front()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }
}
