use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// A required element of the buffer is missing or inconsistent.
    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Attaches the name of the element being read to a FlatBuffers accessor error.
    pub fn flatbuffer(element: impl Into<String>, source: planus::Error) -> Error {
        Error(
            ErrorKind::InvalidFlatBuffer {
                element: element.into(),
                source,
            }
            .into(),
        )
    }

    /// Names the table being read on an accessor error that was converted
    /// without one. Errors that already name an element are left unchanged.
    pub fn with_element(mut self, element: &str) -> Error {
        if let ErrorKind::InvalidFlatBuffer {
            element: current, ..
        } = self.0.as_mut()
            && current.is_empty()
        {
            *current = element.to_string();
        }
        self
    }

    pub fn buffer_limit_exceeded(size: usize, limit: usize) -> Error {
        Error(ErrorKind::BufferLimitExceeded { size, limit }.into())
    }

    /// Returns `true` when the error describes malformed input rather than
    /// a misuse of the API or an encoder limit.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidFormat { .. } | ErrorKind::InvalidFlatBuffer { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid buffer format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("invalid FlatBuffers format for '{element}': {source}")]
    InvalidFlatBuffer {
        element: String,
        source: planus::Error,
    },

    #[error("encoded buffer of {size} bytes exceeds the limit of {limit} bytes")]
    BufferLimitExceeded { size: usize, limit: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<planus::Error> for Error {
    fn from(e: planus::Error) -> Self {
        ErrorKind::InvalidFlatBuffer {
            element: String::new(),
            source: e,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let err = Error::invalid_format("UserList", "no users in buffer");
        assert_eq!(
            err.to_string(),
            "invalid buffer format for 'UserList': no users in buffer"
        );
        assert!(err.is_malformed_input());

        let err = Error::buffer_limit_exceeded(2048, 1024);
        assert_eq!(
            err.to_string(),
            "encoded buffer of 2048 bytes exceeds the limit of 1024 bytes"
        );
        assert!(!err.is_malformed_input());
        assert!(matches!(
            err.into_kind(),
            ErrorKind::BufferLimitExceeded {
                size: 2048,
                limit: 1024
            }
        ));
    }

    #[test]
    fn test_with_element() {
        let source = planus::Error {
            source_location: planus::errors::ErrorLocation {
                type_: "User",
                method: "name",
                byte_offset: 12,
            },
            error_kind: planus::errors::ErrorKind::InvalidOffset,
        };
        let err = Error::from(source).with_element("User");
        match err.kind() {
            ErrorKind::InvalidFlatBuffer { element, .. } => assert_eq!(element, "User"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().starts_with("invalid FlatBuffers format for 'User'"));

        let err = Error::flatbuffer("User::tags", source).with_element("User");
        match err.kind() {
            ErrorKind::InvalidFlatBuffer { element, .. } => assert_eq!(element, "User::tags"),
            other => panic!("unexpected error {other:?}"),
        }

        let err = Error::invalid_format("UserList", "empty").with_element("User");
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidFormat { element, .. } if element == "UserList"
        ));
    }
}
