//! Error types for the upload workflow.
//!
//! Every failure is terminal for the submission attempt; nothing is
//! retried. The `Display` text is what the user sees in the output
//! region, so server and transport messages pass through verbatim.

use thiserror::Error;

/// Errors that can occur while submitting files and reading the response.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Submit fired with an empty file set; the request is never sent.
    #[error("Nenhum arquivo selecionado.")]
    NoFiles,

    /// Percentage text does not parse to a number inside the range.
    #[error("Porcentagem inválida.")]
    InvalidPercent,

    /// Non-2xx status; the message comes from the response's error body.
    #[error("{message}")]
    Server {
        /// HTTP status code of the response
        status: u16,
        /// Message extracted from the JSON error body
        message: String,
    },

    /// The request never completed (fetch rejection, network failure).
    #[error("{0}")]
    Network(String),

    /// 2xx response whose body is not a consumption report.
    #[error("{0}")]
    InvalidResponse(String),
}

impl UploadError {
    /// Create a server error from a status code and extracted message.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = UploadError::server(400, "invalid file");
        assert_eq!(err.to_string(), "invalid file");
    }

    #[test]
    fn network_message_is_surfaced_verbatim() {
        let err = UploadError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
