use gloo_timers::callback::Interval;

use crate::config;

/// A repeating timer that stops firing once dropped.
pub trait Repeating: Sized {
    fn every<F>(millis: u32, tick: F) -> Self
    where
        F: FnMut() + 'static;
}

impl Repeating for Interval {
    fn every<F>(millis: u32, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Interval::new(millis, tick)
    }
}

/// The two timers behind the status tile. Dropping the clock cancels both.
pub struct VitalsClock<T: Repeating = Interval> {
    _heartbeat: T,
    _scanner: T,
}

impl<T: Repeating> VitalsClock<T> {
    pub fn start<H, S>(on_heartbeat: H, on_scan: S) -> Self
    where
        H: FnMut() + 'static,
        S: FnMut() + 'static,
    {
        Self {
            _heartbeat: T::every(config::HEART_RATE_TICK_MS, on_heartbeat),
            _scanner: T::every(config::SCAN_TICK_MS, on_scan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    type Slot = RefCell<Option<Box<dyn FnMut()>>>;

    thread_local! {
        static TIMERS: RefCell<Vec<(u32, Weak<Slot>)>> = RefCell::new(Vec::new());
    }

    /// Stand-in for a browser interval: fired by hand, emptied on drop.
    struct ManualTimer {
        slot: Rc<Slot>,
    }

    impl Repeating for ManualTimer {
        fn every<F>(millis: u32, tick: F) -> Self
        where
            F: FnMut() + 'static,
        {
            let slot: Rc<Slot> = Rc::new(RefCell::new(Some(Box::new(tick))));
            TIMERS.with(|timers| timers.borrow_mut().push((millis, Rc::downgrade(&slot))));
            Self { slot }
        }
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            self.slot.borrow_mut().take();
        }
    }

    /// Fires every registered timer with the given cadence, returns how many ran.
    fn fire(millis: u32) -> usize {
        let slots: Vec<Rc<Slot>> = TIMERS.with(|timers| {
            timers
                .borrow()
                .iter()
                .filter(|(m, _)| *m == millis)
                .filter_map(|(_, slot)| slot.upgrade())
                .collect()
        });
        let mut ran = 0;
        for slot in slots {
            if let Some(tick) = slot.borrow_mut().as_mut() {
                tick();
                ran += 1;
            }
        }
        ran
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn timers_run_at_their_cadences() {
        let (beats, on_heartbeat) = counter();
        let (scans, on_scan) = counter();
        let _clock = VitalsClock::<ManualTimer>::start(on_heartbeat, on_scan);

        assert_eq!(fire(config::HEART_RATE_TICK_MS), 1);
        for _ in 0..3 {
            fire(config::SCAN_TICK_MS);
        }
        assert_eq!(beats.get(), 1);
        assert_eq!(scans.get(), 3);
    }

    #[test]
    fn dropping_the_clock_stops_both_timers() {
        let (beats, on_heartbeat) = counter();
        let (scans, on_scan) = counter();
        let clock = VitalsClock::<ManualTimer>::start(on_heartbeat, on_scan);

        fire(config::HEART_RATE_TICK_MS);
        fire(config::SCAN_TICK_MS);
        drop(clock);

        assert_eq!(fire(config::HEART_RATE_TICK_MS), 0);
        assert_eq!(fire(config::SCAN_TICK_MS), 0);
        assert_eq!(beats.get(), 1);
        assert_eq!(scans.get(), 1);
    }
}
