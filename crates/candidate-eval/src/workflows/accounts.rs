//! Evaluator accounts kept in a plaintext `username,password,role` file.
//!
//! This is a convenience gate for a single-user desk, not an authentication system.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use tracing::{info, warn};

use super::storage::{self, SkippedRecord, StorageError};

const DEFAULT_ROLE: &str = "Evaluator";
const BUILTIN_USERNAME: &str = "admin";
const BUILTIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}

impl User {
    fn builtin_admin() -> Self {
        Self {
            username: "Administrator".to_string(),
            password: BUILTIN_PASSWORD.to_string(),
            role: "System Admin".to_string(),
        }
    }
}

/// Users loaded wholesale from disk; registration appends and rewrites the file.
#[derive(Debug)]
pub struct UserDirectory {
    path: PathBuf,
    users: Mutex<Vec<User>>,
}

impl UserDirectory {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let (users, skipped) = match storage::open_existing(&path)? {
            Some(file) => read_users(file).map_err(|source| StorageError::Csv {
                path: path.clone(),
                source,
            })?,
            None => (Vec::new(), Vec::new()),
        };

        for record in &skipped {
            warn!(
                path = %path.display(),
                line = record.line,
                reason = %record.reason,
                "skipping malformed user record"
            );
        }

        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    /// Registers an evaluator. Usernames are not required to be unique. A failed save leaves the
    /// directory unchanged.
    pub fn register(&self, username: &str, password: &str) -> Result<User, AccountError> {
        if username.is_empty() {
            return Err(AccountError::MissingField { field: "username" });
        }
        if password.is_empty() {
            return Err(AccountError::MissingField { field: "password" });
        }

        let user = User {
            username: username.to_string(),
            password: password.to_string(),
            role: DEFAULT_ROLE.to_string(),
        };

        let mut guard = self.users.lock().map_err(|_| StorageError::Poisoned)?;
        guard.push(user.clone());
        if let Err(err) = storage::replace_file(&self.path, |out| write_users(out, &guard)) {
            guard.pop();
            return Err(err.into());
        }
        info!(username = %user.username, "evaluator registered");
        Ok(user)
    }

    /// First stored exact match wins; otherwise the built-in `admin`/`admin` pair is accepted.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AccountError> {
        let guard = self.users.lock().map_err(|_| StorageError::Poisoned)?;
        if let Some(user) = guard
            .iter()
            .find(|user| user.username == username && user.password == password)
        {
            return Ok(user.clone());
        }

        if username == BUILTIN_USERNAME && password == BUILTIN_PASSWORD {
            return Ok(User::builtin_admin());
        }

        Err(AccountError::InvalidCredentials)
    }

    pub fn users(&self) -> Result<Vec<User>, AccountError> {
        let guard = self.users.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(guard.clone())
    }
}

fn read_users<R: Read>(reader: R) -> Result<(Vec<User>, Vec<SkippedRecord>), csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut users = Vec::new();
    let mut skipped = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                skipped.push(SkippedRecord {
                    line: index as u64 + 1,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match (record.get(0), record.get(1), record.get(2)) {
            (Some(username), Some(password), Some(role)) => users.push(User {
                username: username.to_string(),
                password: password.to_string(),
                role: role.to_string(),
            }),
            _ => skipped.push(SkippedRecord {
                line: record
                    .position()
                    .map(|position| position.line())
                    .unwrap_or(index as u64 + 1),
                reason: format!("expected 3 fields, found {}", record.len()),
            }),
        }
    }

    Ok((users, skipped))
}

fn write_users<W: Write>(writer: W, users: &[User]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for user in users {
        csv_writer.write_record([&user.username, &user.password, &user.role])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
