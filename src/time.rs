use std::ops::AddAssign;

/// A simulated minute, counted from the start of the run.
#[derive(Debug, Clone, Copy, Default, Ord, Eq, PartialEq, PartialOrd)]
pub struct Time(pub u64);

impl Time {
    /// Minutes elapsed since `earlier`. Callers only ever ask for the wait of a plane
    /// that has already arrived, so `earlier` never lies in the future.
    pub fn since(self, earlier: Time) -> u64 {
        debug_assert!(earlier <= self, "{} is after {}", earlier, self);
        self.0 - earlier.0
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.0 / 1440;
        let remaining = self.0 % 1440;
        let hours = remaining / 60;
        let mins = remaining % 60;
        write!(f, "DAY{} {:02}:{:02}", days + 1, hours, mins)
    }
}

impl AddAssign<u64> for Time {
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}
