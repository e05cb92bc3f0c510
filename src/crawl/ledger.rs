use ahash::AHashSet;
use parking_lot::Mutex;

/// Set of resolved addresses already claimed for probing.
///
/// The membership check and the insert are one critical section, so two
/// workers racing on the same address can never both see it as new. The set
/// only grows; entries live for the duration of one crawl.
pub struct SeenLedger {
    seen: Mutex<AHashSet<String>>,
}

impl SeenLedger {
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(AHashSet::new()),
        }
    }

    /// Returns `true` the first time an address is offered and `false` on
    /// every later call. The caller that got `true` owns the probe.
    pub fn check_and_mark(&self, address: &str) -> bool {
        self.seen.lock().insert(address.to_string())
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}

impl Default for SeenLedger {
    fn default() -> Self {
        Self::new()
    }
}
