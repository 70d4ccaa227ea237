//! Single-threaded publish/subscribe channel with replay of the current value.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct ObserverSlot<T> {
    id: u64,
    /// Version of the topic when the observer joined; it only sees broadcasts after that.
    joined_at: u64,
    active: Rc<Cell<bool>>,
    callback: Callback<T>,
}

impl<T> Clone for ObserverSlot<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            joined_at: self.joined_at,
            active: self.active.clone(),
            callback: self.callback.clone(),
        }
    }
}

struct Delivery<T> {
    version: u64,
    value: T,
    /// `None` broadcasts to every observer, `Some(id)` is a replay for one new observer.
    target: Option<u64>,
}

struct TopicInner<T> {
    current: RefCell<T>,
    version: Cell<u64>,
    next_observer_id: Cell<u64>,
    observers: RefCell<Vec<ObserverSlot<T>>>,
    pending: RefCell<VecDeque<Delivery<T>>>,
    dispatching: Cell<bool>,
}

/// A value that pushes every update to its observers.
///
/// Observers get the current value as soon as they subscribe and then every
/// published value, identical or not, until their [`Subscription`] is dropped.
///
/// Publishing from inside an observer is allowed: the new value becomes
/// current right away, but its delivery is queued behind the round in
/// progress, so every observer of that round sees the same value.
pub struct Topic<T> {
    inner: Rc<TopicInner<T>>,
}

impl<T> Clone for Topic<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: Clone + 'static> Topic<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(TopicInner {
                current: RefCell::new(initial),
                version: Cell::new(0),
                next_observer_id: Cell::new(0),
                observers: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.current.borrow().clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().iter().filter(|slot| slot.active.get()).count()
    }

    pub fn publish(&self, value: T) {
        let version = self.inner.version.get() + 1;
        self.inner.version.set(version);
        *self.inner.current.borrow_mut() = value.clone();
        self.inner.pending.borrow_mut().push_back(Delivery { version, value, target: None });
        self.drain();
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, observer: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        let active = Rc::new(Cell::new(true));
        let joined_at = self.inner.version.get();

        self.inner.observers.borrow_mut().push(ObserverSlot {
            id,
            joined_at,
            active: active.clone(),
            callback: Rc::new(RefCell::new(observer)),
        });
        let value = self.get();
        self.inner.pending.borrow_mut().push_back(Delivery { version: joined_at, value, target: Some(id) });
        self.drain();

        Subscription { active }
    }

    fn drain(&self) {
        if self.inner.dispatching.get() {
            return;
        }
        let _guard = DispatchGuard::enter(&self.inner.dispatching);
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(delivery) = next else {
                break;
            };
            // observers registered or dropped by callbacks do not change this round
            let round: Vec<ObserverSlot<T>> = self
                .inner
                .observers
                .borrow()
                .iter()
                .filter(|slot| match delivery.target {
                    Some(id) => slot.id == id,
                    None => delivery.version > slot.joined_at,
                })
                .cloned()
                .collect();
            for slot in round {
                if !slot.active.get() {
                    continue;
                }
                if let Ok(mut callback) = slot.callback.try_borrow_mut() {
                    callback(&delivery.value);
                }
            }
        }
        self.inner.observers.borrow_mut().retain(|slot| slot.active.get());
    }
}

struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Handle to one observer registration. Dropping it unsubscribes; from then
/// on the observer is never called again, even within a round in progress.
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.active.get()).finish()
    }
}
