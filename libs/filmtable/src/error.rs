use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("incorrect film table size (expected {expected:?} bytes, received {received:?} bytes)")]
    #[diagnostic(code(libfilmtable::table_size_error))]
    IncorrectSizeTable { expected: usize, received: usize },
}
