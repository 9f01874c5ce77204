use std::time::{Duration, Instant};

const WINDOW: usize = 3;

/// Sliding-window turns-per-second meter. Each call to `get` records the
/// turns completed since the previous call and averages over the last
/// `WINDOW` calls.
pub struct AvgTurns {
    count: usize,
    last_completed_turns: u32,
    last_called: Instant,
    samples: [(u32, Duration); WINDOW],
}

impl AvgTurns {
    pub fn new() -> Self {
        AvgTurns {
            count: 0,
            last_completed_turns: 0,
            last_called: Instant::now(),
            samples: [(0, Duration::ZERO); WINDOW],
        }
    }

    pub fn get(&mut self, completed_turns: u32) -> f32 {
        self.samples[self.count % WINDOW] = (
            completed_turns - self.last_completed_turns,
            self.last_called.elapsed(),
        );
        self.last_called = Instant::now();
        self.last_completed_turns = completed_turns;
        self.count += 1;
        let turns: u32 = self.samples.iter().map(|(turns, _)| turns).sum();
        let elapsed: f32 = self.samples.iter()
            .map(|(_, duration)| duration.as_secs_f32())
            .sum();
        turns as f32 / elapsed.max(f32::EPSILON)
    }
}

impl Default for AvgTurns {
    fn default() -> Self {
        AvgTurns::new()
    }
}
