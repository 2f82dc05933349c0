use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn validation(message: &str, reason_code: Option<String>) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Storage { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Serialization { message: format!("{}", err) }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::Storage { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::validation("test", None);
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        let err = CommandError::from(LibraryError::malformed("bad file"));
        assert!(matches!(err, CommandError::Storage { reason_code: Some(_), .. }));
        let err = CommandError::from(LibraryError::validation("bad year", None));
        assert!(matches!(err, CommandError::Validation { .. }));
    }
}
