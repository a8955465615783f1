use crate::api::{ApiError, ErrorSink};
use std::collections::HashMap;

/// Progress report for one file, forwarded verbatim from the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub id: usize,
    pub loaded: u64,
    pub total: u64,
}

/// One queued file plus the form fields that ride along with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub id: usize,
    pub file_name: String,
    pub size: u64,
    pub file_field_label: String,
    pub field_separator: String,
}

/// Carrier for the actual bytes. Multipart encoding and the HTTP call live
/// behind this seam; the transport reports progress as it goes.
pub trait UploadTransport {
    fn send(
        &mut self,
        request: &UploadRequest,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<(), ApiError>;
}

/// Upload widget model with deferred execution: picking a file only queues
/// it, and nothing is sent until the wizard page asks for the queue to be
/// flushed. Loaded byte counts are kept per file so the UI can render
/// per-file progress bars.
pub struct FileUploader<T: UploadTransport> {
    transport: T,
    file_field_label: String,
    field_separator: String,
    pending: Vec<UploadRequest>,
    loaded: HashMap<usize, u64>,
    next_id: usize,
}

impl<T: UploadTransport> FileUploader<T> {
    pub fn new(transport: T, file_field_label: impl Into<String>) -> Self {
        Self {
            transport,
            file_field_label: file_field_label.into(),
            field_separator: ",".to_string(),
            pending: Vec::new(),
            loaded: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn set_field_separator(&mut self, separator: impl Into<String>) {
        self.field_separator = separator.into();
    }

    pub fn pending(&self) -> &[UploadRequest] {
        &self.pending
    }

    pub fn loaded(&self, id: usize) -> u64 {
        self.loaded.get(&id).copied().unwrap_or(0)
    }

    /// Queues a file for the next flush and returns its id. The form fields
    /// are bound now, so a separator change after selection does not affect
    /// files already queued.
    pub fn select_file(&mut self, file_name: impl Into<String>, size: u64) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.loaded.insert(id, 0);
        self.pending.push(UploadRequest {
            id,
            file_name: file_name.into(),
            size,
            file_field_label: self.file_field_label.clone(),
            field_separator: self.field_separator.clone(),
        });
        id
    }

    /// Sends everything queued, in selection order. Progress events update
    /// the per-file counters before reaching the caller's callback; a failed
    /// upload is reported to the sink and does not stop the rest of the
    /// queue. Returns the ids that completed.
    pub fn finish_uploads(
        &mut self,
        errors: &mut dyn ErrorSink,
        mut on_progress: impl FnMut(UploadProgress),
    ) -> Vec<usize> {
        let mut completed = Vec::new();
        for request in std::mem::take(&mut self.pending) {
            let loaded = &mut self.loaded;
            let mut track = |progress: UploadProgress| {
                loaded.insert(progress.id, progress.loaded);
                on_progress(progress);
            };
            match self.transport.send(&request, &mut track) {
                Ok(()) => completed.push(request.id),
                Err(err) => errors.notify(err.message()),
            }
        }
        completed
    }
}
