//! Tick counters deciding when new shells go up.

/// Counts frames up to a threshold, then fires once the gate opens.
///
/// While the threshold is reached but the gate is closed the counter stalls:
/// it is neither reset nor incremented, so the launch happens on the first
/// frame the gate opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTimer {
    tick: u32,
    total: u32,
}

impl LaunchTimer {
    pub fn new(total: u32) -> Self {
        Self { tick: 0, total }
    }

    /// Advance one frame. Returns `true` when a launch is due.
    pub fn poll(&mut self, gate_open: bool) -> bool {
        if self.tick >= self.total {
            if gate_open {
                self.tick = 0;
                return true;
            }
            false
        } else {
            self.tick += 1;
            false
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

/// Which launches the scheduler asks for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Launches {
    /// Random target, only while the pointer is up.
    pub auto: bool,
    /// Toward the pointer, only while it is held.
    pub pointer: bool,
}

/// The automatic launcher and the pointer rate limiter.
#[derive(Debug, Clone)]
pub struct LaunchScheduler {
    auto: LaunchTimer,
    limiter: LaunchTimer,
}

impl LaunchScheduler {
    pub fn new(auto_ticks: u32, pointer_ticks: u32) -> Self {
        Self {
            auto: LaunchTimer::new(auto_ticks),
            limiter: LaunchTimer::new(pointer_ticks),
        }
    }

    pub fn poll(&mut self, pointer_pressed: bool) -> Launches {
        Launches {
            auto: self.auto.poll(!pointer_pressed),
            pointer: self.limiter.poll(pointer_pressed),
        }
    }

    pub fn auto_timer(&self) -> &LaunchTimer {
        &self.auto
    }

    pub fn limiter(&self) -> &LaunchTimer {
        &self.limiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_then_fires() {
        let mut timer = LaunchTimer::new(3);
        assert!(!timer.poll(true));
        assert!(!timer.poll(true));
        assert!(!timer.poll(true));
        assert_eq!(timer.tick(), 3);
        assert!(timer.poll(true));
        assert_eq!(timer.tick(), 0);
    }

    #[test]
    fn test_timer_stalls_while_gate_closed() {
        let mut timer = LaunchTimer::new(2);
        timer.poll(false);
        timer.poll(false);
        for _ in 0..10 {
            assert!(!timer.poll(false));
            assert_eq!(timer.tick(), 2);
        }
        assert!(timer.poll(true));
    }

    #[test]
    fn test_zero_threshold_fires_every_open_frame() {
        let mut timer = LaunchTimer::new(0);
        assert!(timer.poll(true));
        assert!(timer.poll(true));
    }

    #[test]
    fn test_scheduler_gates_are_exclusive() {
        let mut scheduler = LaunchScheduler::new(0, 0);
        assert_eq!(
            scheduler.poll(false),
            Launches {
                auto: true,
                pointer: false
            }
        );
        assert_eq!(
            scheduler.poll(true),
            Launches {
                auto: false,
                pointer: true
            }
        );
    }

    #[test]
    fn test_counters_run_independently() {
        let mut scheduler = LaunchScheduler::new(80, 5);
        for _ in 0..5 {
            scheduler.poll(false);
        }
        assert_eq!(scheduler.limiter().tick(), 5);
        assert_eq!(scheduler.auto_timer().tick(), 5);

        // Limiter is primed; holding the pointer fires it and stalls auto
        let launches = scheduler.poll(true);
        assert!(launches.pointer);
        assert!(!launches.auto);
        assert_eq!(scheduler.auto_timer().tick(), 6);
    }
}
