//! Transport whose replies are released by the test.

use async_trait::async_trait;
use cyber_ia_client::client::{classify, RawFailure};
use cyber_ia_client::transport::{Payload, RequestSpec, Transport};
use cyber_ia_client::ErrorEnvelope;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub type Reply = Result<Payload, ErrorEnvelope>;

#[derive(Default)]
pub struct ScriptedTransport {
    calls: AtomicUsize,
    seen: Mutex<Vec<RequestSpec>>,
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply delivered as soon as the call is made.
    pub fn push_reply(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.lock().unwrap().push_back(rx);
    }

    /// Queues a reply the test releases later through the returned sender.
    pub fn push_pending(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<RequestSpec> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, spec: RequestSpec) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(spec);
        let rx = self.replies.lock().unwrap().pop_front();
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| {
                Err(classify(RawFailure::NoResponse {
                    timed_out: false,
                    diagnostic: "script dropped".to_string(),
                }))
            }),
            None => panic!("unscripted call"),
        }
    }
}
