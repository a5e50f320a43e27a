//! Single source of truth for the current path.

use std::cell::RefCell;
use std::fmt;

type Observer = Box<dyn Fn(&str)>;

/// Observable store holding the browser's current path.
///
/// The store is the only mutable navigation state in the application; the
/// route table itself never changes after startup. Observers run
/// synchronously on every navigation event, including repeated navigations
/// to the same path, so matching stays a pure recomputation.
pub struct NavigationStore {
    current: RefCell<String>,
    previous: RefCell<Option<String>>,
    observers: RefCell<Vec<Observer>>,
}

impl NavigationStore {
    /// Creates the store with the path observed at first load.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: RefCell::new(initial.into()),
            previous: RefCell::new(None),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// The currently observed path.
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }

    /// The path observed before the last navigation, if any.
    pub fn previous(&self) -> Option<String> {
        self.previous.borrow().clone()
    }

    /// Registers an observer invoked on every navigation event.
    pub fn subscribe(&self, observer: impl Fn(&str) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Records a navigation to `path` and notifies all observers.
    pub fn navigate(&self, path: &str) {
        {
            let mut current = self.current.borrow_mut();
            *self.previous.borrow_mut() = Some(current.clone());
            *current = path.to_owned();
        }

        for observer in self.observers.borrow().iter() {
            observer(path);
        }
    }
}

impl fmt::Debug for NavigationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationStore")
            .field("current", &self.current.borrow())
            .field("previous", &self.previous.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}
