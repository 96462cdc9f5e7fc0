use super::{DbConnection, DbPool};
use crate::errors::StorageError;
use budgetflow_core::errors::{Error, Result};
use diesel::result::Error as DieselError;
use diesel::SqliteConnection;
use log::{debug, error};
use std::any::Any;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

// A job takes the writer's connection and returns a core Result, which is what
// repository callers expect.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction; an error from the job
    /// rolls the transaction back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::from(StorageError::WriterUnavailable(
                    "writer actor stopped".to_string(),
                ))
            })?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::from(StorageError::WriterUnavailable(
                "writer actor dropped the reply".to_string(),
            ))
        })??;

        boxed.downcast::<T>().map(|value| *value).map_err(|_| {
            Error::from(StorageError::WriterUnavailable(
                "writer result had an unexpected type".to_string(),
            ))
        })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor holds one pooled connection for its lifetime and processes jobs
/// serially. Must be called from within a Tokio runtime.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        let mut conn: Option<DbConnection> = None;
        while let Some((job, reply_tx)) = rx.recv().await {
            let result = match acquire(&pool, &mut conn) {
                Ok(c) => run_job(c, job),
                Err(e) => Err(e),
            };
            // The requester may have gone away (timeout, cancellation).
            let _ = reply_tx.send(result);
        }
        debug!("All write handles dropped; writer actor exiting");
    });

    WriteHandle { tx }
}

/// Transaction error that keeps a job's own core error intact.
enum TxError {
    Diesel(DieselError),
    Job(Error),
}

impl From<DieselError> for TxError {
    fn from(err: DieselError) -> Self {
        TxError::Diesel(err)
    }
}

fn acquire<'a>(pool: &DbPool, slot: &'a mut Option<DbConnection>) -> Result<&'a mut DbConnection> {
    if slot.is_none() {
        let conn = pool.get().map_err(|e| {
            error!("Writer actor could not get a connection: {}", e);
            Error::from(StorageError::PoolError(e))
        })?;
        *slot = Some(conn);
    }
    slot.as_mut().ok_or_else(|| {
        Error::from(StorageError::WriterUnavailable(
            "writer connection missing".to_string(),
        ))
    })
}

fn run_job(conn: &mut DbConnection, job: ErasedJob) -> Result<Box<dyn Any + Send + 'static>> {
    conn.immediate_transaction::<_, TxError, _>(|c| job(c).map_err(TxError::Job))
        .map_err(|e| match e {
            TxError::Diesel(err) => StorageError::QueryFailed(err).into(),
            TxError::Job(err) => err,
        })
}
