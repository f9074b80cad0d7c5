//! Background producers feeding the wizard's event queue.

use std::io;
use std::time::Duration;

use crossterm::event::{Event as TermEvent, KeyEventKind};
use futures::{Stream, StreamExt};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::wizard::{Event, EventSender};

/// Forwards key presses and resizes from the terminal until cancelled.
///
/// When the input stream fails or ends, [`Event::InputClosed`] is posted so
/// the loop can exit instead of waiting on keys that will never arrive.
#[derive(Debug)]
pub struct EventReader {
    cancel: CancellationToken,
}

impl EventReader {
    /// Reads from `input`, usually a crossterm `EventStream`.
    pub fn spawn<S>(input: S, events: EventSender, cancel: CancellationToken) -> Self
    where
        S: Stream<Item = io::Result<TermEvent>> + Send + 'static,
    {
        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::pin!(input);
            loop {
                let event = tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    next = input.next() => match next {
                        Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Some(Ok(TermEvent::Resize(w, h))) => Event::Resize(w, h),
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            warn!(error = %e, "terminal event stream failed");
                            Event::InputClosed
                        }
                        None => {
                            warn!("terminal event stream ended");
                            Event::InputClosed
                        }
                    },
                };
                let closed = event == Event::InputClosed;
                if events.send(event).is_err() || closed {
                    break;
                }
            }
            debug!("event reader stopped");
        });
        Self { cancel }
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Posts [`Event::Tick`] at a fixed rate until cancelled or dropped.
#[derive(Debug)]
pub struct Ticker {
    cancel: CancellationToken,
}

impl Ticker {
    pub fn spawn(rate: Duration, events: EventSender, cancel: CancellationToken) -> Self {
        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + rate, rate);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    _ = interval.tick() => {
                        if events.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        Self { cancel }
    }

    /// Stops the ticks.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::stream;
    use tokio::sync::mpsc;

    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> TermEvent {
        TermEvent::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[tokio::test]
    async fn reader_forwards_presses_and_resizes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let input = stream::iter(vec![
            Ok(key(KeyCode::Char('a'), KeyEventKind::Press)),
            Ok(key(KeyCode::Char('a'), KeyEventKind::Release)),
            Ok(TermEvent::FocusGained),
            Ok(TermEvent::Resize(100, 40)),
        ])
        .chain(stream::pending());
        let _reader = EventReader::spawn(input, tx, CancellationToken::new());

        let Some(Event::Key(pressed)) = rx.recv().await else {
            panic!("expected a key event");
        };
        assert_eq!(pressed.code, KeyCode::Char('a'));
        assert_eq!(rx.recv().await, Some(Event::Resize(100, 40)));
    }

    #[tokio::test]
    async fn reader_reports_stream_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let input = stream::iter(vec![Err(io::Error::other("tty gone"))]);
        let _reader = EventReader::spawn(input, tx, CancellationToken::new());
        assert_eq!(rx.recv().await, Some(Event::InputClosed));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn reader_reports_end_of_input() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _reader = EventReader::spawn(
            stream::empty::<io::Result<TermEvent>>(),
            tx,
            CancellationToken::new(),
        );
        assert_eq!(rx.recv().await, Some(Event::InputClosed));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_reader_posts_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let input = stream::pending::<io::Result<TermEvent>>();
        let _reader = EventReader::spawn(input, tx, cancel);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_posts_at_rate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();
        let _ticker = Ticker::spawn(Duration::from_millis(100), tx, CancellationToken::new());
        assert_eq!(rx.recv().await, Some(Event::Tick));
        assert_eq!(rx.recv().await, Some(Event::Tick));
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_ticker_goes_quiet() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_millis(100), tx, CancellationToken::new());
        ticker.stop();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_ticker_goes_quiet() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(Ticker::spawn(Duration::from_millis(100), tx, CancellationToken::new()));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
