use aws_sdk_sqs::error::SdkError;
use aws_sdk_sqs::operation::delete_message::DeleteMessageError;
use aws_sdk_sqs::operation::receive_message::ReceiveMessageError;
use aws_sdk_sqs::operation::send_message::SendMessageError;
use thiserror::Error;

/// Result type alias for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Error types for queue operations
#[derive(Error, Debug)]
pub enum QueueError {
    /// Error receiving messages from SQS
    #[error("Failed to receive messages from SQS: {0}")]
    ReceiveMessage(#[from] SdkError<ReceiveMessageError>),

    /// Error sending message to SQS
    #[error("Failed to send message to SQS: {0}")]
    SendMessage(#[from] SdkError<SendMessageError>),

    /// Error deleting message from SQS
    #[error("Failed to delete message from SQS: {0}")]
    DeleteMessage(#[from] SdkError<DeleteMessageError>),

    /// Invalid message format
    #[error("Invalid message format: {0}")]
    InvalidMessage(String),

    /// Message group ID is required for FIFO queues
    #[error("Message group ID required for FIFO queue")]
    MissingMessageGroupId,
}

impl QueueError {
    /// Checks if this error represents an upstream (5xx) error
    #[must_use]
    pub fn is_upstream_error(&self) -> bool {
        match self {
            Self::ReceiveMessage(sdk_err) => Self::check_sdk_error_status(sdk_err),
            Self::SendMessage(sdk_err) => Self::check_sdk_error_status(sdk_err),
            Self::DeleteMessage(sdk_err) => Self::check_sdk_error_status(sdk_err),
            Self::InvalidMessage(_) | Self::MissingMessageGroupId => false,
        }
    }

    fn check_sdk_error_status<E>(sdk_err: &SdkError<E>) -> bool {
        if let SdkError::ServiceError(err) = sdk_err {
            return err.raw().status().as_u16() >= 500;
        }
        false
    }
}
