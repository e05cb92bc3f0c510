//! The concurrent probing engine: a fixed pool of workers draining a
//! seeded queue, with shared dedup and discovery state.

pub mod collector;
pub mod ledger;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::Mutex;
use url::Url;

use crate::config::CrawlConfig;
use crate::probe::probe_url;
use crate::target;
use crate::wordlist;
use self::collector::{Finding, FoundLog};
use self::ledger::SeenLedger;

/// Shared end of the work queue. Workers take the lock only long enough to
/// dequeue one address.
type Queue = Arc<Mutex<UnboundedReceiver<String>>>;

pub struct Crawler {
    client: Client,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(client: Client, config: CrawlConfig) -> Self {
        Self { client, config }
    }

    /// Run one crawl to completion and return the discoveries in the order
    /// they were made.
    ///
    /// All candidates are seeded in a single burst and the sender is dropped
    /// before any worker starts, so the closed channel doubles as the
    /// shutdown signal: the queue yields every buffered address before it
    /// reports closure, which means a worker that observes closure has also
    /// observed a fully drained queue. Joining the pool is the completion
    /// barrier - a worker only returns after finishing its last item, the
    /// inter-probe delay included.
    pub async fn run(&self, base: &Url, words: &[String]) -> Vec<Finding> {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let mut seeded = 0usize;
        for candidate in wordlist::expand_candidates(words) {
            match target::resolve(base, &candidate) {
                Some(address) => {
                    // send on an unbounded channel only fails once the
                    // receiver is gone, and we still hold it
                    let _ = tx.send(address);
                    seeded += 1;
                }
                None => tracing::debug!("skipping unresolvable candidate {}", candidate),
            }
        }
        drop(tx);
        tracing::info!("seeded {} candidates across {} workers", seeded, self.config.threads);

        let queue: Queue = Arc::new(Mutex::new(rx));
        let ledger = Arc::new(SeenLedger::new());
        let found = Arc::new(FoundLog::new());

        let mut handles = Vec::with_capacity(self.config.threads);
        for _ in 0..self.config.threads {
            handles.push(tokio::spawn(worker_loop(
                Arc::clone(&queue),
                Arc::clone(&ledger),
                Arc::clone(&found),
                self.client.clone(),
                self.config.delay,
                self.config.timeout_secs,
            )));
        }
        futures::future::join_all(handles).await;

        found.snapshot()
    }
}

/// One worker: dequeue, dedup, probe, record, pause. Exits when the queue
/// is closed and empty. Neither lock is held across the probe or the sleep.
async fn worker_loop(
    queue: Queue,
    ledger: Arc<SeenLedger>,
    found: Arc<FoundLog>,
    client: Client,
    delay: Duration,
    timeout_secs: u64,
) {
    loop {
        let address = {
            let mut rx = queue.lock().await;
            rx.recv().await
        };
        let Some(address) = address else { break };

        // duplicate: another worker owns this address; skip without delay
        if !ledger.check_and_mark(&address) {
            continue;
        }

        let outcome = probe_url(&client, &address, timeout_secs).await;
        match outcome.finding_status() {
            Some(code) => {
                println!("[+] Found: {} (Status: {})", address, code);
                found.push(Finding::new(address, code));
            }
            None => tracing::debug!("{} -> {:?}", address, outcome),
        }

        tokio::time::sleep(delay).await;
    }
}
