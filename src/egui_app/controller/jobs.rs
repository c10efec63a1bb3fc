use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, Sender, TryRecvError},
    },
    thread,
};

use crate::prediction::{self, PredictError, PredictionResult};

pub(crate) enum JobMessage {
    PredictFinished(PredictResultMessage),
}

/// One submission, carried onto the worker thread.
pub(crate) struct PredictJob {
    pub(crate) service_url: String,
    pub(crate) payload: serde_json::Value,
}

pub(crate) struct PredictResultMessage {
    pub(crate) result: Result<PredictionResult, PredictError>,
}

/// Background job plumbing for the controller. The prediction slot admits at
/// most one in-flight request.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    predict_in_progress: bool,
    predict_cancel: Option<Arc<AtomicBool>>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            predict_in_progress: false,
            predict_cancel: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn predict_in_progress(&self) -> bool {
        self.predict_in_progress
    }

    /// Issue one prediction request on a worker thread.
    ///
    /// Ignored while the slot is occupied. The cancel flag is only tripped by
    /// [`cancel_predict`]; a cancelled worker drops its outcome instead of
    /// delivering it.
    ///
    /// [`cancel_predict`]: Self::cancel_predict
    pub(super) fn begin_predict(&mut self, job: PredictJob) {
        if self.predict_in_progress {
            return;
        }
        self.predict_in_progress = true;
        let cancel = Arc::new(AtomicBool::new(false));
        self.predict_cancel = Some(cancel.clone());
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = prediction::predict(&job.service_url, &job.payload);
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(JobMessage::PredictFinished(PredictResultMessage { result }));
        });
    }

    /// Release the slot after an outcome has been handled.
    pub(super) fn clear_predict(&mut self) {
        self.predict_in_progress = false;
        self.predict_cancel = None;
    }

    /// Host teardown hook: suppress any in-flight delivery and free the slot.
    pub(super) fn cancel_predict(&mut self) {
        if let Some(cancel) = self.predict_cancel.take() {
            cancel.store(true, Ordering::Relaxed);
        }
        self.predict_in_progress = false;
    }
}
