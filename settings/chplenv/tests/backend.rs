//! Backend Type Tests
//!
//! Verifies parsing and formatting of tasking backend names.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chplenv::{Rule, TaskingBackend, Tasks, UnknownBackendError};

#[test]
fn test_names() {
    assert_eq!(TaskingBackend::Fifo.as_str(), "fifo");
    assert_eq!(TaskingBackend::Qthreads.to_string(), "qthreads");
    assert_eq!(format!("{}", TaskingBackend::Muxed), "muxed");
}

#[test]
fn test_parse_known() {
    for backend in TaskingBackend::ALL {
        assert_eq!(backend.as_str().parse::<TaskingBackend>(), Ok(backend));
    }
}

#[test]
fn test_parse_is_exact() {
    for name in ["", "FIFO", "Qthreads", " muxed", "muxed\n", "massivethreads"] {
        let err = name.parse::<TaskingBackend>().unwrap_err();
        assert_eq!(err, UnknownBackendError::new(name));
        assert_eq!(err.name(), name);
    }
}

#[test]
fn test_error_message() {
    let err = "none".parse::<TaskingBackend>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown tasking backend 'none' (expected fifo, qthreads or muxed)"
    );
}

#[test]
fn test_tasks_backend() {
    assert_eq!(
        Tasks::Backend(TaskingBackend::Fifo).backend(),
        Some(TaskingBackend::Fifo)
    );
    assert_eq!(Tasks::Override("qthreads".into()).backend(), Some(TaskingBackend::Qthreads));
    assert_eq!(Tasks::Override("custom".into()).backend(), None);
    assert_eq!(Tasks::Override("custom".into()).as_str(), "custom");
    assert!(!Tasks::Backend(TaskingBackend::Muxed).is_override());
}

#[test]
fn test_rule_descriptions() {
    assert_eq!(Rule::Override.to_string(), "CHPL_TASKS override");
    assert_eq!(Rule::Default.describe(), "default");
}
