use axum::body::{self};
use axum::response::{IntoResponse, Response};
use http::{header, StatusCode};
use std::error::Error as StdError;
use std::fmt;
use tracing::error;

struct ErrorKindProperties {
    status: StatusCode,
    kind: &'static str,
    title: &'static str,
    is_loggable: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum ErrorKind {
    ClassroomNotFound,
    DbConnectionFailed,
    DbQueryFailed,
    SerializationFailed,
    ResponseBuildFailed,
}

impl ErrorKind {
    pub fn is_loggable(self) -> bool {
        let properties: ErrorKindProperties = self.into();
        properties.is_loggable
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties: ErrorKindProperties = self.to_owned().into();
        write!(f, "{}", properties.title)
    }
}

impl From<ErrorKind> for ErrorKindProperties {
    fn from(k: ErrorKind) -> Self {
        match k {
            ErrorKind::ClassroomNotFound => ErrorKindProperties {
                status: StatusCode::NOT_FOUND,
                kind: "classroom_not_found",
                title: "Classroom not found",
                is_loggable: false,
            },
            ErrorKind::DbConnectionFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "database_connection_failed",
                title: "Internal server error",
                is_loggable: true,
            },
            ErrorKind::DbQueryFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "database_query_failed",
                title: "Internal server error",
                is_loggable: true,
            },
            ErrorKind::SerializationFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "serialization_failed",
                title: "Internal server error",
                is_loggable: true,
            },
            ErrorKind::ResponseBuildFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "response_build_failed",
                title: "Internal server error",
                is_loggable: true,
            },
        }
    }
}

pub struct Error {
    kind: ErrorKind,
    source: Option<anyhow::Error>,
}

impl Error {
    pub fn new(kind: ErrorKind, source: anyhow::Error) -> Self {
        Self {
            kind,
            source: Some(source),
        }
    }

    pub fn from_kind(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Loggable kinds are reported server-side with their source chain.
    /// The client body stays a fixed message whatever the source says.
    fn notify(&self) {
        let properties: ErrorKindProperties = self.kind.into();
        if !properties.is_loggable {
            return;
        }

        match &self.source {
            Some(source) => error!(kind = properties.kind, "{:?}", source),
            None => error!(kind = properties.kind, "{}", properties.title),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.notify();

        let properties: ErrorKindProperties = self.kind.into();
        let body = serde_json::json!({ "error": properties.title }).to_string();

        Response::builder()
            .status(properties.status.as_u16())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body::boxed(body::Full::from(body)))
            .unwrap()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.kind, source),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(AsRef::<dyn StdError + 'static>::as_ref)
    }
}

pub trait ErrorExt<T> {
    fn error(self, kind: ErrorKind) -> Result<T, Error>;
}

impl<T, E: Into<anyhow::Error>> ErrorExt<T> for Result<T, E> {
    fn error(self, kind: ErrorKind) -> Result<T, Error> {
        self.map_err(|source| Error::new(kind, source.into()))
    }
}
