//! Typed, queued event bus owned by the composition root.
//!
//! `emit` only enqueues. Delivery happens when the owner calls [`EventBus::poll`],
//! so an event raised while the owner is mid-update is handled after that
//! update finishes rather than re-entering it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::Dispose;

type Listener<E> = Rc<dyn Fn(&E)>;

pub struct EventBus<E: 'static> {
    inner: Rc<RefCell<BusInner<E>>>,
}

struct BusInner<E> {
    queue: VecDeque<E>,
    listeners: Vec<(u64, Listener<E>)>,
    next_listener: u64,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                queue: VecDeque::new(),
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    pub fn emit(&self, event: E) {
        self.inner.borrow_mut().queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Listeners see every delivered event; the returned guard removes the listener.
    pub fn listen(&self, f: impl Fn(&E) + 'static) -> Dispose {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, Rc::new(f)));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Dispose::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Pops the oldest event, shows it to every listener and hands it to the caller.
    pub fn poll(&self) -> Option<E> {
        let (event, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let event = inner.queue.pop_front()?;
            let listeners: Vec<Listener<E>> =
                inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (event, listeners)
        };
        for l in listeners {
            l(&event);
        }
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Ping {
        A,
        B(u8),
    }

    #[test]
    fn events_are_queued_until_polled() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _guard = bus.listen({
            let seen = seen.clone();
            move |e: &Ping| seen.borrow_mut().push(e.clone())
        });

        bus.emit(Ping::A);
        bus.emit(Ping::B(7));
        assert!(seen.borrow().is_empty());
        assert_eq!(bus.pending(), 2);

        assert_eq!(bus.poll(), Some(Ping::A));
        assert_eq!(bus.poll(), Some(Ping::B(7)));
        assert_eq!(bus.poll(), None);
        assert_eq!(*seen.borrow(), vec![Ping::A, Ping::B(7)]);
    }

    #[test]
    fn listener_may_emit_while_delivering() {
        let bus = EventBus::new();
        let _guard = bus.listen({
            let bus = bus.clone();
            move |e: &Ping| {
                if *e == Ping::A {
                    bus.emit(Ping::B(1));
                }
            }
        });
        bus.emit(Ping::A);
        assert_eq!(bus.poll(), Some(Ping::A));
        assert_eq!(bus.poll(), Some(Ping::B(1)));
    }

    #[test]
    fn disposed_listener_stops_receiving() {
        let bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));
        let guard = bus.listen({
            let count = count.clone();
            move |_: &Ping| *count.borrow_mut() += 1
        });
        bus.emit(Ping::A);
        bus.poll();
        guard.run();
        bus.emit(Ping::A);
        bus.poll();
        assert_eq!(*count.borrow(), 1);
    }
}
