//! Helpers for the acceptance scenarios.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use opresult::{AnyError, OperationResult};
use opresult_errors::{ConflictError, Error, InvalidStateError, NotFoundError, ReprConfig};
use tempfile::TempDir;

/// Build an error of the named kind.
///
/// Kinds: `not-found` (detail is a numeric id), `conflict`, `plain`, and
/// `invalid-state` (detail is `"<from> -> <to>"`).
pub fn failure(kind: &str, detail: &str) -> Result<AnyError> {
    let error = match kind {
        "not-found" => {
            let id: i64 = detail
                .parse()
                .with_context(|| format!("not-found id must be numeric, got {:?}", detail))?;
            AnyError::from(NotFoundError::create(id))
        }
        "conflict" => AnyError::from(ConflictError::create(detail)),
        "plain" => AnyError::from(Error::create(detail)),
        "invalid-state" => {
            let Some((from, to)) = detail.split_once(" -> ") else {
                bail!("invalid-state detail must look like \"a -> b\", got {:?}", detail);
            };
            AnyError::from(InvalidStateError::create(from.to_string(), to.to_string()))
        }
        other => bail!("unknown error kind {:?}", other),
    };
    Ok(error)
}

/// Name the kind of `error`, dispatching on its concrete type.
pub fn kind_of(error: &AnyError) -> &'static str {
    OperationResult::<()>::fail(error.clone())
        .resolve_container_value(|m| {
            m.on_error(|_: &NotFoundError<i64>| "not-found")?
                .on_error(|_: &ConflictError| "conflict")?
                .on_error(|_: &InvalidStateError<String>| "invalid-state")?
                .on_error(|_: &Error| "plain")?
                .on_success_strict(|_| "none")
        })
        .unwrap_or("unknown")
}

/// A temporary directory holding one configuration file.
#[derive(Debug)]
pub struct ConfigFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl ConfigFixture {
    pub fn write(file_name: &str, content: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let path = dir.path().join(file_name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(Self { _dir: dir, path })
    }

    pub fn load(&self) -> Result<ReprConfig> {
        Ok(ReprConfig::load(&self.path)?)
    }
}

/// Serialize `error` the way an outside consumer would receive it.
pub fn record_json(error: &AnyError, config: &ReprConfig) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(error.to_record(config))?)
}
