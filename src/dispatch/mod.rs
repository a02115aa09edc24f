//! Per-file dispatch: validation, check matching, execution and failure containment.

mod filter;

pub use filter::CheckFilter;

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Once;

use tracing::{debug, warn};

use crate::checker::{CheckOutput, CheckRegistry, InspectorMessage, RegisteredCheck};
use crate::container::{Container, ContainerReader, DataObject};
use crate::error::{InspectorError, Result};
use crate::report::{FileReport, MessageBuckets, organize};

thread_local! {
    static CONTAINING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_PANIC_HOOK: Once = Once::new();

/// Open the container at `path` and inspect it.
///
/// Any failure or panic while opening, validating or reading the container becomes a
/// single `ERROR` message; messages gathered before it are kept.
#[must_use]
pub fn inspect_file(
    reader: &dyn ContainerReader,
    path: &Path,
    registry: &CheckRegistry,
    filter: &CheckFilter,
) -> FileReport {
    let file_path = path.display().to_string();
    let mut buckets = MessageBuckets::new();
    let outcome = catch_quietly(|| {
        let container = reader.open(path)?;
        collect_messages(container.as_ref(), &file_path, registry, filter, &mut buckets)
    });
    record_failure(outcome, path, &file_path, &mut buckets);
    organize(buckets)
}

/// Inspect an already opened container.
///
/// The first failure stops the scan of this container and is reported as one `ERROR`
/// message; messages gathered before it are kept.
#[must_use]
pub fn inspect_container(
    container: &dyn Container,
    file_path: &str,
    registry: &CheckRegistry,
    filter: &CheckFilter,
) -> FileReport {
    let mut buckets = MessageBuckets::new();
    let outcome =
        catch_quietly(|| collect_messages(container, file_path, registry, filter, &mut buckets));
    record_failure(outcome, Path::new(file_path), file_path, &mut buckets);
    organize(buckets)
}

fn record_failure(
    outcome: std::thread::Result<Result<()>>,
    path: &Path,
    file_path: &str,
    buckets: &mut MessageBuckets,
) {
    let err = match outcome {
        Ok(Ok(())) => return,
        Ok(Err(err)) => err,
        Err(payload) => InspectorError::Container {
            path: path.to_path_buf(),
            reason: panic_reason(payload.as_ref()),
        },
    };
    warn!(file = %file_path, error = %err, "inspection stopped early");
    buckets.push(InspectorMessage::error(&err, file_path));
}

fn collect_messages(
    container: &dyn Container,
    file_path: &str,
    registry: &CheckRegistry,
    filter: &CheckFilter,
    buckets: &mut MessageBuckets,
) -> Result<()> {
    buckets.extend(
        container
            .validate()?
            .into_iter()
            .map(|issue| InspectorMessage::validation(issue, file_path)),
    );

    let objects = container.objects()?;
    for check in registry.all().filter(|check| filter.allows(check)) {
        let targets = objects.iter().filter(|object| check.applies_to(object));
        for object in targets {
            let findings = run_contained(check, object)?.into_findings();
            buckets.extend(findings.into_iter().map(|finding| {
                InspectorMessage::from_finding(
                    finding,
                    check.name(),
                    check.importance(),
                    object,
                    file_path,
                )
            }));
        }
    }
    debug!(file = %file_path, messages = buckets.len(), "dispatch finished");
    Ok(())
}

/// Run `body`, catching panics. Panics caught here are logged at debug level instead of
/// going to the process panic hook.
fn catch_quietly<T>(body: impl FnOnce() -> T) -> std::thread::Result<T> {
    QUIET_PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CONTAINING.with(Cell::get) {
                debug!(panic = %info, "contained panic");
            } else {
                previous(info);
            }
        }));
    });
    let outer = CONTAINING.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(body));
    CONTAINING.with(|flag| flag.set(outer));
    result
}

/// Run one check on one object, turning errors and panics into `CheckFailed`.
fn run_contained(check: &RegisteredCheck, object: &DataObject) -> Result<CheckOutput> {
    match catch_quietly(|| check.run(object)) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(err @ InspectorError::CheckFailed { .. })) => Err(err),
        Ok(Err(err)) => Err(InspectorError::CheckFailed {
            check: check.name().to_string(),
            reason: err.to_string(),
        }),
        Err(payload) => Err(InspectorError::CheckFailed {
            check: check.name().to_string(),
            reason: panic_reason(payload.as_ref()),
        }),
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panicked".to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
