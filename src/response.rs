use serde::Serialize;
use serde_json::Value;

use crate::entry::Entry;
use crate::error::{FileQueryError, Result};

/// Outcome class of a query, as a transport would report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    InternalError,
}

impl Status {
    /// The matching HTTP status code.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }

    fn from_error(err: &FileQueryError) -> Self {
        if err.is_invalid_argument() {
            Self::BadRequest
        } else {
            Self::InternalError
        }
    }
}

/// A query result translated for a request/response transport.
///
/// Only successful replies carry a body. Failures are reported through the
/// status alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: Status,
    pub body:   Option<Value>,
}

impl Reply {
    /// Map the result of a directory listing.
    pub fn listing(result: Result<Vec<Entry>>) -> Self {
        match result {
            Ok(entries) => Self::ok(&entries),
            Err(e) => Self::failure(&e),
        }
    }

    /// Map the result of a single-entry lookup.
    pub fn details(result: Result<Option<Entry>>) -> Self {
        match result {
            Ok(Some(entry)) => Self::ok(&entry),
            Ok(None) => Self::empty(Status::NotFound),
            Err(e) => Self::failure(&e),
        }
    }

    /// The body as a JSON document, or an empty string when there is none.
    pub fn to_json_string(&self) -> String {
        self.body
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_default()
    }

    fn ok<T: Serialize + ?Sized>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self {
                status: Status::Ok,
                body:   Some(body),
            },
            Err(e) => {
                log::error!("failed to serialise reply: {e}");
                Self::empty(Status::InternalError)
            }
        }
    }

    fn failure(err: &FileQueryError) -> Self {
        let status = Status::from_error(err);
        if status == Status::InternalError {
            log::error!("query failed: {err}");
        }
        Self::empty(status)
    }

    fn empty(status: Status) -> Self {
        Self { status, body: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Kind;
    use std::path::PathBuf;

    fn entry(name: &str, kind: Kind) -> Entry {
        Entry::new(
            name.to_string(),
            kind,
            7,
            chrono::Local::now(),
            PathBuf::from("/data").join(name),
        )
    }

    #[test]
    fn status_codes() {
        assert_eq!(Status::Ok.code(), 200);
        assert_eq!(Status::BadRequest.code(), 400);
        assert_eq!(Status::NotFound.code(), 404);
        assert_eq!(Status::InternalError.code(), 500);
    }

    #[test]
    fn invalid_argument_is_bad_request() {
        let reply = Reply::listing(Err(FileQueryError::InvalidArgument("blank".into())));
        assert_eq!(reply.status, Status::BadRequest);
        assert!(reply.body.is_none());
        assert_eq!(reply.to_json_string(), "");
    }

    #[test]
    fn absent_entry_is_not_found() {
        let reply = Reply::details(Ok(None));
        assert_eq!(reply.status, Status::NotFound);
        assert!(reply.body.is_none());
    }

    #[test]
    fn filesystem_fault_is_internal_error() {
        let err = FileQueryError::io(
            "/data/x",
            std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"),
        );
        assert_eq!(Reply::details(Err(err)).status, Status::InternalError);
        assert_eq!(
            Reply::listing(Err(FileQueryError::Walk("loop".into()))).status,
            Status::InternalError
        );
    }

    #[test]
    fn listing_body_is_an_array_of_entries() {
        let reply = Reply::listing(Ok(vec![
            entry("a.txt", Kind::Extension("txt".into())),
            entry("sub", Kind::Directory),
        ]));
        assert_eq!(reply.status, Status::Ok);

        let body = reply.body.unwrap();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], "txt");
        assert_eq!(items[1]["type"], "directory");
        assert_eq!(items[1]["isDirectory"], true);
        assert_eq!(items[1]["size"], 0);
    }

    #[test]
    fn details_body_is_a_single_object() {
        let reply = Reply::details(Ok(Some(entry("noext", Kind::Unknown))));
        assert_eq!(reply.status, Status::Ok);
        assert!(reply.to_json_string().contains("\"name\":\"noext\""));
    }
}
