//! Fixed-delay timers driven by an explicit clock.
//!
//! Nothing here sleeps or spawns: the owner calls [`Timers::poll`] with the
//! current instant and receives the payloads of every timer that came due.

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

new_key_type! {
    pub struct TimerId;
}

struct Timer<E> {
    due: Instant,
    period: Option<Duration>,
    payload: E,
}

pub struct Timers<E> {
    slots: SlotMap<TimerId, Timer<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    /// Fires once, `delay` after `now`.
    pub fn once(&mut self, now: Instant, delay: Duration, payload: E) -> TimerId {
        self.slots.insert(Timer {
            due: now + delay,
            period: None,
            payload,
        })
    }

    /// Fires every `period` until cancelled. A zero period is bumped to 1ms.
    pub fn every(&mut self, now: Instant, period: Duration, payload: E) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.slots.insert(Timer {
            due: now + period,
            period: Some(period),
            payload,
        })
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.slots.remove(id).is_some()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.slots.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.slots.values().map(|t| t.due).min()
    }
}

impl<E: Clone> Timers<E> {
    /// Returns `(id, payload)` for every expiry up to `now`, oldest first.
    /// Periodic timers yield once per elapsed period.
    pub fn poll(&mut self, now: Instant) -> Vec<(TimerId, E)> {
        let mut fired: Vec<(Instant, TimerId, E)> = Vec::new();
        let mut finished = Vec::new();
        for (id, timer) in self.slots.iter_mut() {
            while timer.due <= now {
                fired.push((timer.due, id, timer.payload.clone()));
                match timer.period {
                    Some(p) => timer.due += p,
                    None => {
                        finished.push(id);
                        break;
                    }
                }
            }
        }
        for id in finished {
            self.slots.remove(id);
        }
        fired.sort_by_key(|(due, _, _)| *due);
        fired.into_iter().map(|(_, id, e)| (id, e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_a_single_time() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let id = timers.once(t0, Duration::from_secs(3), "search");

        assert!(timers.poll(t0 + Duration::from_secs(2)).is_empty());
        assert_eq!(timers.poll(t0 + Duration::from_secs(3)), vec![(id, "search")]);
        assert!(timers.poll(t0 + Duration::from_secs(10)).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn periodic_fires_per_elapsed_period_until_cancelled() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let id = timers.every(t0, Duration::from_secs(1), 'x');

        assert_eq!(timers.poll(t0 + Duration::from_millis(3500)).len(), 3);
        assert!(timers.cancel(id));
        assert!(timers.poll(t0 + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn fired_in_due_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.once(t0, Duration::from_secs(5), 2);
        timers.once(t0, Duration::from_secs(1), 1);
        let got: Vec<i32> = timers
            .poll(t0 + Duration::from_secs(6))
            .into_iter()
            .map(|(_, e)| e)
            .collect();
        assert_eq!(got, vec![1, 2]);
    }
}
