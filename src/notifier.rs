//! Suscripciones a eventos por medio de canales.
//! Cada suscriptor recibe un `Receiver`; al descartarlo deja de estar suscripto y el
//! `Notifier` lo quita en el proximo envio.
use std::sync::mpsc::{channel, Receiver, Sender};

pub struct Notifier<E: Clone> {
    subscribers: Vec<Sender<E>>,
}

impl<E: Clone> Notifier<E> {
    pub fn new() -> Notifier<E> {
        Notifier { subscribers: Vec::new() }
    }

    pub fn subscribe(&mut self) -> Receiver<E> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    pub fn notify(&mut self, event: E) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    pub fn subscribers(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E: Clone> Default for Notifier<E> {
    fn default() -> Notifier<E> {
        Notifier::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deliver_events_to_every_subscriber() {
        let mut notifier = Notifier::new();
        let first = notifier.subscribe();
        let second = notifier.subscribe();
        notifier.notify(7);
        assert_eq!(vec![7], first.try_iter().collect::<Vec<i32>>());
        assert_eq!(vec![7], second.try_iter().collect::<Vec<i32>>());
    }

    #[test]
    fn should_drop_subscribers_that_went_away() {
        let mut notifier = Notifier::new();
        let kept = notifier.subscribe();
        let dropped = notifier.subscribe();
        drop(dropped);
        notifier.notify(1);
        assert_eq!(1, notifier.subscribers());
        assert_eq!(Ok(1), kept.try_recv());
    }
}
