use std::{
  backtrace::BacktraceStatus,
  fmt::{Debug, Display},
};

pub struct AppError {
  err: anyhow::Error,
}

impl AppError {
  pub fn new<E: Into<anyhow::Error>>(err: E) -> Self {
    Self { err: err.into() }
  }

  /// Borrow the underlying error, e.g. to `downcast_ref` a domain error.
  pub fn inner(&self) -> &anyhow::Error {
    &self.err
  }
}

impl Display for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:#}", self.err)
  }
}

// `main` returning `Err` prints this, so keep it readable.
// The backtrace needs `RUST_BACKTRACE=1` to be captured.
impl Debug for AppError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let bt = self.err.backtrace();
    if cfg!(debug_assertions) && bt.status() == BacktraceStatus::Captured {
      write!(f, "{:#}\nBacktrace:\n{}", self.err, bt)
    } else {
      write!(f, "{:#}", self.err)
    }
  }
}

impl<E> From<E> for AppError
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Self::new(err)
  }
}
