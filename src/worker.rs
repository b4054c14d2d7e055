use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;

/// Result of background work, drained by the owning event loop.
#[derive(Debug)]
pub(crate) struct PendingResult<T> {
    rx: mpsc::Receiver<T>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PollState<T> {
    Ready(T),
    Pending,
    Disconnected,
}

impl<T> PendingResult<T> {
    pub(crate) fn poll(&self) -> PollState<T> {
        match self.rx.try_recv() {
            Ok(result) => PollState::Ready(result),
            Err(mpsc::TryRecvError::Empty) => PollState::Pending,
            Err(mpsc::TryRecvError::Disconnected) => PollState::Disconnected,
        }
    }

    pub(crate) fn wait(self) -> Option<T> {
        self.rx.recv().ok()
    }
}

pub(crate) fn spawn_worker<T, W>(name: &str, work: W) -> PendingResult<T>
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<T>();
    let job = move || {
        let _ = tx.send(work());
    };
    let _detached = spawn_detached(name, job);
    PendingResult { rx }
}

/// Runs `work` on a named thread, or inline when the thread cannot be spawned.
pub(crate) fn spawn_detached<W>(name: &str, work: W) -> Option<JoinHandle<()>>
where
    W: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<W>();
    let spawned = std::thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            if let Ok(work) = rx.recv() {
                work();
            }
        });
    match spawned {
        Ok(handle) => {
            // The receiver only drops early if the thread died before running.
            if let Err(mpsc::SendError(work)) = tx.send(work) {
                work();
            }
            Some(handle)
        }
        Err(err) => {
            tracing::warn!(?err, worker = name, "failed to spawn worker thread; running inline");
            work();
            None
        }
    }
}

/// Long-lived thread that handles submitted items one at a time, in order.
///
/// Items queued while the handler is busy collapse into the newest one.
pub(crate) struct SerialWorker<T> {
    tx: mpsc::Sender<T>,
    handle: JoinHandle<()>,
}

impl<T> SerialWorker<T> {
    /// Hands the item back when the worker thread is gone.
    pub(crate) fn submit(&self, item: T) -> Result<(), T> {
        self.tx.send(item).map_err(|mpsc::SendError(item)| item)
    }

    /// Drains queued items and joins the thread. False if the handler panicked.
    pub(crate) fn finish(self) -> bool {
        let Self { tx, handle } = self;
        drop(tx);
        handle.join().is_ok()
    }
}

pub(crate) fn spawn_serial<T, H>(name: &str, mut handler: H) -> io::Result<SerialWorker<T>>
where
    T: Send + 'static,
    H: FnMut(T) + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<T>();
    let handle = std::thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            while let Ok(mut item) = rx.recv() {
                if let Some(newest) = rx.try_iter().last() {
                    item = newest;
                }
                handler(item);
            }
        })?;
    Ok(SerialWorker { tx, handle })
}
