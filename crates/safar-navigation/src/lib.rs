//! # Navigation
//!
//! One back stack of [`Screen`]s per app session. The top entry is the visible
//! screen; back pops, but the root entry is never removed.
//!
//! Pushes are checked against [`Screen::successors`]. Resets
//! ([`Navigator::clear_and_push`]) are always allowed, and [`Navigator::show`]
//! finds a legal way to any screen: pop back to it, push it, or rebuild the
//! stack from `Home` along the shortest legal path.
//!
//! Every entry owns a [`Scope`]; whatever a screen starts inside that scope
//! (timers, highlights) is cleaned up when the entry is popped.

mod screen;

use std::{cell::RefCell, rc::Rc};

use safar_core::*;
use thiserror::Error;

pub use screen::{HomeTab, Screen};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("cannot navigate from {from} to {to}")]
    IllegalTransition { from: Screen, to: Screen },
    #[error("back stack snapshot is empty")]
    EmptySnapshot,
    #[error("back stack snapshot is malformed: {0}")]
    Snapshot(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionDir {
    None,
    Push,
    Pop,
}

struct Entry {
    id: u64,
    screen: Screen,
    /// Disposed when the entry is popped.
    scope: Scope,
}

struct BackState {
    entries: Vec<Entry>,
    next_id: u64,
    last_dir: TransitionDir,
}

impl BackState {
    fn push(&mut self, screen: Screen) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            screen,
            scope: Scope::new(),
        });
    }
}

/// Shared handle to the back stack. Clones observe the same stack.
#[derive(Clone)]
pub struct Navigator {
    inner: Rc<RefCell<BackState>>,
    current: Signal<Screen>,
}

impl Navigator {
    pub fn new(start: Screen) -> Self {
        let mut state = BackState {
            entries: Vec::new(),
            next_id: 1,
            last_dir: TransitionDir::None,
        };
        state.push(start);
        Self {
            inner: Rc::new(RefCell::new(state)),
            current: signal(start),
        }
    }

    pub fn current(&self) -> Screen {
        self.current.get()
    }

    /// Fires with the new top screen after every change.
    pub fn current_signal(&self) -> Signal<Screen> {
        self.current.clone()
    }

    pub fn size(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn last_dir(&self) -> TransitionDir {
        self.inner.borrow().last_dir
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.inner.borrow().entries.iter().map(|e| e.screen).collect()
    }

    pub fn contains(&self, screen: Screen) -> bool {
        self.inner.borrow().entries.iter().any(|e| e.screen == screen)
    }

    /// Id and scope of the visible entry.
    pub fn top(&self) -> Option<(u64, Screen, Scope)> {
        let s = self.inner.borrow();
        s.entries.last().map(|e| (e.id, e.screen, e.scope.clone()))
    }

    pub fn top_scope(&self) -> Option<Scope> {
        self.top().map(|(_, _, scope)| scope)
    }

    fn publish(&self) {
        let top = self.inner.borrow().entries.last().map(|e| e.screen);
        if let Some(screen) = top {
            self.current.set(screen);
        }
    }

    pub fn push(&self, screen: Screen) -> Result<(), NavError> {
        let from = self.current();
        if !from.can_push(screen) {
            return Err(NavError::IllegalTransition { from, to: screen });
        }
        {
            let mut s = self.inner.borrow_mut();
            s.push(screen);
            s.last_dir = TransitionDir::Push;
        }
        log::debug!("nav push {from} -> {screen}");
        self.publish();
        Ok(())
    }

    /// Pops the top entry and disposes its scope. The root entry stays.
    pub fn pop(&self) -> bool {
        let entry = {
            let mut s = self.inner.borrow_mut();
            if s.entries.len() <= 1 {
                return false;
            }
            s.last_dir = TransitionDir::Pop;
            s.entries.pop()
        };
        if let Some(e) = entry {
            log::debug!("nav pop {}", e.screen);
            e.scope.dispose();
        }
        self.publish();
        true
    }

    /// Swaps the visible screen in place, disposing the old entry's scope.
    pub fn replace(&self, screen: Screen) {
        let old = {
            let mut s = self.inner.borrow_mut();
            let old = s.entries.pop();
            s.push(screen);
            s.last_dir = TransitionDir::Push;
            old
        };
        if let Some(e) = old {
            e.scope.dispose();
        }
        self.publish();
    }

    /// Drops the whole stack (disposing from the top down) and starts over at `screen`.
    pub fn clear_and_push(&self, screen: Screen) {
        let old = {
            let mut s = self.inner.borrow_mut();
            let old = std::mem::take(&mut s.entries);
            s.push(screen);
            s.last_dir = TransitionDir::Push;
            old
        };
        for e in old.into_iter().rev() {
            e.scope.dispose();
        }
        log::debug!("nav reset to {screen}");
        self.publish();
    }

    /// Pops until the topmost entry matching `pred` is visible (or, when
    /// `inclusive`, until it is gone too). Never pops the root.
    pub fn pop_to<F: Fn(Screen) -> bool>(&self, pred: F, inclusive: bool) -> usize {
        let count = {
            let s = self.inner.borrow();
            match s.entries.iter().rposition(|e| pred(e.screen)) {
                Some(idx) => {
                    let keep = if inclusive { idx } else { idx + 1 };
                    s.entries.len() - keep.max(1)
                }
                None => 0,
            }
        };
        let mut popped = 0;
        for _ in 0..count {
            if self.pop() {
                popped += 1;
            }
        }
        popped
    }

    /// Makes `screen` visible by the least disruptive legal route.
    pub fn show(&self, screen: Screen) {
        if self.current() == screen {
            return;
        }
        if self.contains(screen) {
            self.pop_to(|s| s == screen, false);
            return;
        }
        if self.push(screen).is_ok() {
            return;
        }
        match screen.path_from_home() {
            Some(path) => {
                self.clear_and_push(Screen::Home);
                for step in path {
                    // path_from_home only yields legal pushes
                    let _ = self.push(step);
                }
            }
            None => self.clear_and_push(screen),
        }
    }

    pub fn to_json(&self) -> Result<String, NavError> {
        serde_json::to_string(&self.screens()).map_err(|e| NavError::Snapshot(e.to_string()))
    }

    /// Replaces the stack with a snapshot; existing scopes are disposed.
    pub fn restore_json(&self, json: &str) -> Result<(), NavError> {
        let screens: Vec<Screen> =
            serde_json::from_str(json).map_err(|e| NavError::Snapshot(e.to_string()))?;
        if screens.is_empty() {
            return Err(NavError::EmptySnapshot);
        }
        let old = {
            let mut s = self.inner.borrow_mut();
            let old = std::mem::take(&mut s.entries);
            for screen in screens {
                s.push(screen);
            }
            s.last_dir = TransitionDir::None;
            old
        };
        for e in old.into_iter().rev() {
            e.scope.dispose();
        }
        self.publish();
        Ok(())
    }
}

/// Back dispatcher
///
/// The platform calls `handle()` on a hardware/system back press; the app
/// installs the handler for the stack it displays.
pub mod back {
    use std::{cell::RefCell, rc::Rc};

    type Handler = Rc<dyn Fn() -> bool>;

    thread_local! {
        static H: RefCell<Option<Handler>> = const { RefCell::new(None) };
    }

    pub fn set(handler: Option<Handler>) {
        H.with(|h| *h.borrow_mut() = handler);
    }

    pub fn handle() -> bool {
        let handler = H.with(|h| h.borrow().clone());
        match handler {
            Some(handler) => handler(),
            None => false,
        }
    }
}

/// Install the global back handler for `nav`; disposing uninstalls it.
pub fn install_back_handler(nav: &Navigator) -> Dispose {
    let nav = nav.clone();
    back::set(Some(Rc::new(move || nav.pop())));
    on_unmount(|| back::set(None))
}
