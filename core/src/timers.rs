/// # Timers
/// Two 8-bit countdown timers, decremented once per `tick` (nominally at 60Hz).
///
/// - delay is readable and writable by programs
/// - sound is write-only for programs; the host is told when it runs out
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers::default()
    }

    /// Decrements both timers, stopping at 0.
    ///
    /// `on_beep` is called on the tick that takes the sound timer from 1 to 0, and never
    /// otherwise.
    pub fn tick<F: FnOnce()>(&mut self, on_beep: F) {
        if self.delay > 0 {
            self.delay -= 1;
        }

        if self.sound > 0 {
            if self.sound == 1 {
                on_beep();
            }
            self.sound -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beeps_once_when_sound_runs_out() {
        let mut timers = Timers { delay: 0, sound: 3 };
        let mut beeps = Vec::new();
        for tick in 0..5 {
            timers.tick(|| beeps.push(tick));
        }
        assert_eq!(beeps, vec![2]);
        assert_eq!(timers.sound, 0);
    }

    #[test]
    fn test_delay_floors_at_zero() {
        let mut timers = Timers { delay: 2, sound: 0 };
        timers.tick(|| panic!("no sound was queued"));
        assert_eq!(timers.delay, 1);
        timers.tick(|| panic!("no sound was queued"));
        timers.tick(|| panic!("no sound was queued"));
        assert_eq!(timers.delay, 0);
    }

    #[test]
    fn test_timers_are_independent() {
        let mut timers = Timers { delay: 1, sound: 4 };
        timers.tick(|| {});
        assert_eq!(timers, Timers { delay: 0, sound: 3 });
    }
}
