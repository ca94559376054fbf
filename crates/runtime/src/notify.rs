/// Identifies a registered subscriber so it can be removed later.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Explicit subscriber list.
///
/// This replaces ambient event-bus dispatch: whoever owns the `Notifier`
/// owns the notification contract, and nothing else can observe or inject
/// events. Subscribers are invoked synchronously, in subscription order.
pub struct Notifier<T> {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Notifier<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Invokes every subscriber with `value`, in subscription order.
    pub fn notify(&mut self, value: &T) {
        for (_id, subscriber) in &mut self.subscribers {
            subscriber(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Notifier;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();

        let a = seen.clone();
        notifier.subscribe(move |v: &i32| a.borrow_mut().push(("a", *v)));
        let b = seen.clone();
        notifier.subscribe(move |v: &i32| b.borrow_mut().push(("b", *v)));

        notifier.notify(&1);
        assert_eq!(*seen.borrow(), vec![("a", 1), ("b", 1)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let seen = Rc::new(RefCell::new(0u32));
        let mut notifier = Notifier::new();

        let s = seen.clone();
        let id = notifier.subscribe(move |_: &()| *s.borrow_mut() += 1);

        notifier.notify(&());
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify(&());
        assert_eq!(*seen.borrow(), 1);
        assert!(notifier.is_empty());
    }
}
