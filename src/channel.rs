//! Bounded queue shared between an event producer and the control loop.
//!
//! Built on `critical-section` and `heapless::Deque`, so the producer may be
//! an interrupt handler or another executor task while the control loop
//! drains it.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// The queue was full; the rejected value is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull<T>(pub T);

/// Fixed-capacity multi-producer queue
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Enqueue `value`, or return it if the queue is full
    pub fn push(&self, value: T) -> Result<(), QueueFull<T>> {
        critical_section::with(|cs| {
            self.queue
                .borrow_ref_mut(cs)
                .push_back(value)
                .map_err(QueueFull)
        })
    }

    /// Dequeue the oldest value
    pub fn pop(&self) -> Option<T> {
        critical_section::with(|cs| self.queue.borrow_ref_mut(cs).pop_front())
    }

    /// Number of queued values
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every queued value
    pub fn clear(&self) {
        critical_section::with(|cs| self.queue.borrow_ref_mut(cs).clear());
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn push(&self, value: T) -> Result<(), QueueFull<T>> {
        self.channel.push(value)
    }
}

/// Consumer handle
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn pop(&self) -> Option<T> {
        self.channel.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}
