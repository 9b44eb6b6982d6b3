use std::{fmt, io};

#[derive(Debug)]
pub enum ClientError {
    Io(io::Error),
    /// Server answered with something other than the expected literal.
    UnexpectedReply { expected: String, got: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Io(e) => write!(f, "IO error: {}", e),
            ClientError::UnexpectedReply { expected, got } => {
                write!(f, "unexpected reply: expected {expected:?}, got {got:?}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<io::Error> for ClientError {
    fn from(e: io::Error) -> Self {
        ClientError::Io(e)
    }
}
