use crossbeam_channel::Receiver;

use crate::{Step, Stream};

/// Values received from a channel, in arrival order.
///
/// Created via [`receive`]. Advancing blocks the calling thread until a value
/// arrives or every sender has been dropped. Once the channel is disconnected and
/// drained the stream is exhausted.
#[derive(Debug)]
pub struct Receive<T> {
    rx: Option<Receiver<T>>,
}

/// Create a stream that pulls values from `rx`.
///
/// ```rust
/// use std::thread;
/// use streams::prelude::*;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// let producer = thread::spawn(move || {
///     for i in 0..3 {
///         tx.send(i).unwrap();
///     }
/// });
/// assert_eq!(receive(rx).collect(), vec![0, 1, 2]);
/// producer.join().unwrap();
/// ```
pub fn receive<T>(rx: Receiver<T>) -> Receive<T> {
    Receive { rx: Some(rx) }
}

impl<T> Stream for Receive<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        let Some(rx) = &self.rx else {
            return Step::Done;
        };
        match rx.recv() {
            Ok(value) => Step::More(value),
            Err(_) => {
                tracing::trace!("channel disconnected, releasing receiver");
                self.rx = None;
                Step::Done
            }
        }
    }
}
