use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Counts the number of times any clone of it has been dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// Tracks the number of [`Tracked`] values currently alive, so that every construction can be
/// matched against a destruction.
#[derive(Debug, Default, Clone)]
pub struct LiveCounter(Rc<Cell<usize>>);

impl LiveCounter {
    pub fn new() -> LiveCounter {
        LiveCounter::default()
    }

    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.0.set(self.0.get() + 1);
        Tracked {
            value,
            live: self.0.clone(),
        }
    }

    pub fn live(&self) -> usize {
        self.0.get()
    }
}

/// A value which is counted by the [`LiveCounter`] that created it while it is alive.
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    live: Rc<Cell<usize>>,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.live.set(self.live.get() + 1);
        Tracked {
            value: self.value.clone(),
            live: self.live.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}
