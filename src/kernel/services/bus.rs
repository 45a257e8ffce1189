use std::sync::mpsc::{self, Receiver, SendError, Sender, TryRecvError};

/// Observable state changes published by the search controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    PatternChanged,
    ContentChanged,
    OptionsChanged,
    DocumentAttached,
    DocumentDetached,
    SizeChanged(usize),
    HighlightIndexChanged(usize),
    CursorPositionChanged(usize),
    LinePositionChanged(usize),
    ErrorChanged(Option<String>),
}

#[derive(Clone)]
pub struct SearchBusSender {
    tx: Sender<SearchEvent>,
}

pub struct SearchBusReceiver {
    rx: Receiver<SearchEvent>,
}

pub fn search_bus() -> (SearchBusSender, SearchBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (SearchBusSender { tx }, SearchBusReceiver { rx })
}

impl SearchBusSender {
    pub fn send(&self, event: SearchEvent) -> Result<(), SendError<SearchEvent>> {
        self.tx.send(event)
    }
}

impl SearchBusReceiver {
    pub fn try_recv(&mut self) -> Result<SearchEvent, TryRecvError> {
        self.rx.try_recv()
    }

    /// Everything published so far, in order.
    pub fn drain(&mut self) -> Vec<SearchEvent> {
        self.rx.try_iter().collect()
    }
}

/// Fan-out to every live receiver; receivers that were dropped are pruned.
#[derive(Default)]
pub struct SearchBus {
    senders: Vec<SearchBusSender>,
}

impl SearchBus {
    pub fn subscribe(&mut self) -> SearchBusReceiver {
        let (tx, rx) = search_bus();
        self.senders.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }

    pub fn publish(&mut self, event: SearchEvent) {
        tracing::trace!(?event, "search event");
        self.senders
            .retain(|sender| sender.send(event.clone()).is_ok());
    }
}
