//! Terminal input polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use marquee_core::EventKind;

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

/// How long one blocking `crossterm::event::poll` call waits
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Read terminal input on a blocking thread until the token is cancelled
/// or the receiver is dropped.
///
/// Focus and paste events are not forwarded.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !cancel_token.is_cancelled() {
            match event::poll(POLL_TIMEOUT) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(error) => {
                    warn!(%error, "Terminal poll failed");
                    break;
                }
            }
            let raw = match event::read() {
                Ok(Event::Key(key)) => RawEvent::Key(key),
                Ok(Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                Ok(Event::Resize(w, h)) => RawEvent::Resize(w, h),
                Ok(_) => continue,
                Err(error) => {
                    warn!(%error, "Terminal read failed");
                    break;
                }
            };
            if tx.send(raw).is_err() {
                break;
            }
        }
        debug!("Event poller stopped");
    })
}

/// Turn a raw event into what components see.
///
/// Key releases and mouse events other than the wheel are dropped.
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind == KeyEventKind::Release => None,
        RawEvent::Key(key) => Some(EventKind::Key(key)),
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            }),
            MouseEventKind::ScrollUp => Some(EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            }),
            _ => None,
        },
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}
