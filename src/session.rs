//! Scan session: the current result set and what happens when the path changes.
//!
//! A [`ScanSession`] owns the single result set and error on display. Every
//! call to [`ScanSession::scan`] is a new request with a higher generation.
//! Starting a request cancels the one in flight, and a request that finishes
//! after a newer one started is discarded, so the newest request always wins
//! regardless of completion order.
//!
//! A failed scan leaves the previous result set in place and reports the
//! failure once through the caller's callback.

use std::{
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use log::debug;

use crate::{error::ScanError, finder::Finder, project::Project};

/// What became of one scan request.
#[derive(Debug)]
pub enum ScanOutcome {
    /// The results replaced the current set; holds the number of projects.
    Applied(usize),

    /// A newer request started first; nothing changed.
    Superseded,

    /// The scan failed; the previous results stay current.
    Failed(ScanError),
}

/// Snapshot of what a session currently shows.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    /// Root the current results were scanned from
    pub path: Option<PathBuf>,

    /// Results of the last successful scan
    pub projects: Vec<Project>,

    /// Message of the last failure, cleared by the next success
    pub error: Option<String>,

    /// Generation of the request that produced this state
    pub generation: u64,
}

/// One registered scan request.
#[derive(Debug)]
struct Ticket {
    generation: u64,
    cancel: Arc<AtomicBool>,
}

/// Coordinates scans for one view of the results.
#[derive(Debug)]
pub struct ScanSession {
    finder: Finder,
    latest: AtomicU64,
    in_flight: Mutex<Arc<AtomicBool>>,
    state: Mutex<SessionState>,
}

impl ScanSession {
    /// Create a session that scans with `finder`.
    #[must_use]
    pub fn new(finder: Finder) -> Self {
        Self {
            finder,
            latest: AtomicU64::new(0),
            in_flight: Mutex::new(Arc::new(AtomicBool::new(false))),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Scan `root` and make its results current unless a newer scan started.
    ///
    /// `on_error` is called exactly once if this request fails and is still
    /// the newest one; it is never called for superseded requests.
    pub fn scan(&self, root: &Path, on_error: impl FnOnce(&ScanError)) -> ScanOutcome {
        let ticket = self.begin();
        let result = self.finder.scan_cancellable(root, &ticket.cancel);
        self.finish(&ticket, root, result, on_error)
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock_state().clone()
    }

    /// The current result set.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.lock_state().projects.clone()
    }

    /// Register a new request and cancel the one in flight.
    ///
    /// Generation and cancel flag are swapped under one lock so that the
    /// newest generation always owns the live flag.
    fn begin(&self) -> Ticket {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = Arc::new(AtomicBool::new(false));
        let previous = std::mem::replace(&mut *in_flight, Arc::clone(&cancel));
        previous.store(true, Ordering::SeqCst);
        debug!("Starting scan #{generation}");

        Ticket { generation, cancel }
    }

    /// Apply a finished request's result if it is still the newest.
    fn finish(
        &self,
        ticket: &Ticket,
        root: &Path,
        result: Result<Vec<Project>, ScanError>,
        on_error: impl FnOnce(&ScanError),
    ) -> ScanOutcome {
        let generation = ticket.generation;
        let mut state = self.lock_state();
        if self.latest.load(Ordering::SeqCst) != generation {
            debug!("Discarding scan #{generation} of {}", root.display());
            return ScanOutcome::Superseded;
        }

        state.generation = generation;

        match result {
            Ok(projects) => {
                let count = projects.len();
                state.path = Some(root.to_path_buf());
                state.projects = projects;
                state.error = None;
                ScanOutcome::Applied(count)
            }
            Err(ScanError::Cancelled) => ScanOutcome::Superseded,
            Err(err) => {
                state.error = Some(err.to_string());
                drop(state);
                on_error(&err);
                ScanOutcome::Failed(err)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
