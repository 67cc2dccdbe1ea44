use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Externally assigned classroom identifier, taken from the request path
/// verbatim. No validation beyond presence of the path segment.
#[derive(Deserialize, Serialize, sqlx::Type, Clone, Hash, Eq, PartialEq, Debug)]
#[sqlx(transparent)]
pub struct ClassroomId(String);

impl Display for ClassroomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ClassroomId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ClassroomId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<ClassroomId> for String {
    fn from(value: ClassroomId) -> Self {
        value.0
    }
}
