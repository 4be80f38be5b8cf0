/*!
 * Bounded task scheduler.
 *
 * Tasks are queued in submission order on an unbounded channel. A single
 * dispatcher drains the queue, waiting for one of `limit` semaphore permits
 * before spawning each task, so tasks start in FIFO order and at most
 * `limit` of them run at any time. The permit is released when the task
 * finishes, which lets the dispatcher admit the next queued task.
 */

use futures::future::BoxFuture;
use log::warn;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};
use tokio::sync::{Semaphore, mpsc, oneshot};

use crate::errors::SchedulerError;

type Job = BoxFuture<'static, ()>;

/// Semaphore-gated FIFO task launcher
#[derive(Debug)]
pub struct Scheduler {
    sender: mpsc::UnboundedSender<Job>,
    limit: usize,
    active: Arc<AtomicUsize>,
    pending: Arc<AtomicUsize>,
}

impl Scheduler {
    /// Create a scheduler admitting at most `limit` concurrent tasks.
    ///
    /// A limit of zero is treated as one. Must be called from within a Tokio
    /// runtime, since it spawns the dispatcher task.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        let (sender, receiver) = mpsc::unbounded_channel();
        let active = Arc::new(AtomicUsize::new(0));
        let pending = Arc::new(AtomicUsize::new(0));

        tokio::spawn(dispatch(
            receiver,
            Arc::new(Semaphore::new(limit)),
            active.clone(),
            pending.clone(),
        ));

        Self {
            sender,
            limit,
            active,
            pending,
        }
    }

    /// Queue `task` and return a handle that resolves once it has run.
    pub fn submit<F, T>(&self, task: F) -> TaskHandle<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (result_tx, result_rx) = oneshot::channel();
        let job: Job = Box::pin(async move {
            let output = task.await;
            // The caller may have dropped its handle
            let _ = result_tx.send(output);
        });

        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.sender.send(job).is_err() {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            warn!("Scheduler dispatcher is gone, task was not queued");
        }

        TaskHandle { receiver: result_rx }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of tasks currently running
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Number of tasks waiting for a free slot
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

async fn dispatch(
    mut receiver: mpsc::UnboundedReceiver<Job>,
    semaphore: Arc<Semaphore>,
    active: Arc<AtomicUsize>,
    pending: Arc<AtomicUsize>,
) {
    while let Some(job) = receiver.recv().await {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };

        pending.fetch_sub(1, Ordering::SeqCst);
        active.fetch_add(1, Ordering::SeqCst);
        let slot = ActiveSlot(active.clone());

        tokio::spawn(async move {
            // Locals drop in reverse order: the active count goes down
            // before the permit is handed back, also when the job panics.
            let _permit = permit;
            let _slot = slot;
            job.await;
        });
    }
}

struct ActiveSlot(Arc<AtomicUsize>);

impl Drop for ActiveSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Completion handle for a submitted task
#[derive(Debug)]
pub struct TaskHandle<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> Future for TaskHandle<T> {
    type Output = Result<T, SchedulerError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map_err(|_| SchedulerError::TaskDropped)
    }
}
