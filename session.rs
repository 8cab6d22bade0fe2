use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::error::Result;

const DEFAULT_APP_NAME: &str = "PetitionDataProcessor";
const DEFAULT_DATA_DIR: &str = "data";

/// Builder for [`Session`].
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    app_name: String,
    data_dir: PathBuf,
    threads: usize, // 0 = one worker per logical CPU
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            threads: 0,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Directory that input and output file names are resolved against.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> Result<Session> {
        let app_name = self.app_name.clone();
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(move |i| format!("{}-{}", app_name, i))
            .build()?;
        info!(
            app = %self.app_name,
            data_dir = %self.data_dir.display(),
            workers = pool.current_num_threads(),
            "session started"
        );
        Ok(Session {
            app_name: self.app_name,
            data_dir: self.data_dir,
            pool,
            started: Instant::now(),
        })
    }
}

/// Execution handle shared by every pipeline stage.
///
/// Create it before loading, pass it to the processor, and call
/// [`Session::close`] once the output has been written.
#[derive(Debug)]
pub struct Session {
    app_name: String,
    data_dir: PathBuf,
    pool: ThreadPool,
    started: Instant,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Resolve a bare file name inside the data directory.
    pub fn data_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Run `op` on the session's worker pool.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    pub fn close(self) {
        debug!(app = %self.app_name, "shutting down worker pool");
        info!(
            app = %self.app_name,
            "session closed after {:.2?}",
            self.started.elapsed()
        );
    }
}
