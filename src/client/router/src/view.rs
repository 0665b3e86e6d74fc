/* src/client/router/src/view.rs */

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::ViewLoadError;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type ViewFuture = BoxFuture<Result<ViewModule, ViewLoadError>>;

/// Deferred loader: each call starts one fetch of the view's implementation unit.
pub type ViewLoaderFn = Arc<dyn Fn() -> ViewFuture + Send + Sync>;

/// A loaded view implementation, handed to the host framework for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModule {
  pub chunk: String,
  pub source: String,
}

impl ViewModule {
  pub fn new(chunk: impl Into<String>, source: impl Into<String>) -> Self {
    Self { chunk: chunk.into(), source: source.into() }
  }
}

/// Where view chunks come from.
pub trait ViewSource: Send + Sync {
  fn fetch(&self, chunk: &str) -> ViewFuture;
}

/// Reads `<dir>/<chunk>.<extension>` from disk.
pub struct FsViewSource {
  dir: PathBuf,
  extension: String,
}

impl FsViewSource {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into(), extension: "html".to_string() }
  }

  pub fn extension(mut self, extension: impl Into<String>) -> Self {
    self.extension = extension.into();
    self
  }

  pub fn chunk_path(&self, chunk: &str) -> PathBuf {
    self.dir.join(format!("{chunk}.{}", self.extension))
  }
}

impl ViewSource for FsViewSource {
  fn fetch(&self, chunk: &str) -> ViewFuture {
    let path = self.chunk_path(chunk);
    let chunk = chunk.to_string();
    Box::pin(async move {
      match tokio::fs::read_to_string(&path).await {
        Ok(source) => Ok(ViewModule { chunk, source }),
        Err(e) => {
          let message = format!("{}: {e}", path.display());
          Err(ViewLoadError::Fetch { chunk, message })
        }
      }
    })
  }
}

/// Bind a chunk name to a source, producing the route's deferred loader.
pub fn lazy(source: &Arc<dyn ViewSource>, chunk: &str) -> ViewLoaderFn {
  let source = Arc::clone(source);
  let chunk = chunk.to_string();
  Arc::new(move || source.fetch(&chunk))
}
