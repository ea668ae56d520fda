//! Scoped keyboard subscriptions.
//!
//! A host owns one [`KeyboardListeners`] registry for its global key events.
//! Views subscribe while they are active and the returned [`Subscription`]
//! unregisters the listener when dropped, so mounting a view twice never
//! leaves two handlers behind.

use crate::engine::{CalculatorEngine, Snapshot};
use crate::input::keymap::{Key, KeyMap};
use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

type Listener = Box<dyn FnMut(&Key) -> bool>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Registry of key listeners for a single host window.
///
/// Listeners must not subscribe or drop subscriptions from inside
/// [`dispatch`](Self::dispatch).
#[derive(Clone, Default)]
pub struct KeyboardListeners {
    registry: Rc<RefCell<Registry>>,
}

impl KeyboardListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It returns `true` to suppress the host default.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&Key) -> bool + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Box::new(listener));
        trace!(id, "keyboard listener subscribed");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a key to every listener in subscription order.
    ///
    /// Returns `true` if any listener asked to suppress the host default.
    pub fn dispatch(&self, key: &Key) -> bool {
        let mut registry = self.registry.borrow_mut();
        let mut prevent_default = false;
        for listener in registry.listeners.values_mut() {
            prevent_default |= listener(key);
        }
        prevent_default
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for a registered listener; unregisters on drop.
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            trace!(id = self.id, "keyboard listener released");
        }
    }
}

/// A calculator view: an engine plus its keyboard wiring.
///
/// # Example
///
/// ```rust
/// use calcstate::engine::CalculatorEngine;
/// use calcstate::input::{CalculatorSession, Key, KeyboardListeners};
///
/// let listeners = KeyboardListeners::new();
/// let mut session = CalculatorSession::new(CalculatorEngine::new());
/// session.activate(&listeners);
///
/// for name in ["6", "*", "7", "Enter"] {
///     listeners.dispatch(&Key::from_name(name));
/// }
/// assert_eq!(session.engine().current_value(), "42");
///
/// session.deactivate();
/// assert!(listeners.is_empty());
/// ```
pub struct CalculatorSession {
    engine: Rc<RefCell<CalculatorEngine>>,
    keymap: KeyMap,
    subscription: Option<Subscription>,
}

impl CalculatorSession {
    pub fn new(engine: CalculatorEngine) -> Self {
        let keymap = KeyMap::new(engine.config().variant);
        Self {
            engine: Rc::new(RefCell::new(engine)),
            keymap,
            subscription: None,
        }
    }

    /// Start receiving keys from `listeners`.
    ///
    /// Any earlier subscription is released first, so activating twice
    /// leaves exactly one listener.
    pub fn activate(&mut self, listeners: &KeyboardListeners) {
        self.subscription = None;

        let engine = Rc::clone(&self.engine);
        let keymap = self.keymap;
        self.subscription = Some(listeners.subscribe(move |key| {
            match keymap.resolve(key) {
                Some(action) => {
                    engine.borrow_mut().dispatch(action.command);
                    action.prevent_default
                }
                None => false,
            }
        }));
        debug!("calculator session activated");
    }

    /// Stop receiving keys.
    pub fn deactivate(&mut self) {
        if self.subscription.take().is_some() {
            debug!("calculator session deactivated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn engine(&self) -> Ref<'_, CalculatorEngine> {
        self.engine.borrow()
    }

    /// Mutable access for pointer input (button clicks).
    pub fn engine_mut(&self) -> RefMut<'_, CalculatorEngine> {
        self.engine.borrow_mut()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.borrow().snapshot()
    }
}
