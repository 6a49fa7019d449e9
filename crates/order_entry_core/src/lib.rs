#![forbid(unsafe_code)]

pub mod execution;
pub mod form;
pub mod numeric;
pub mod risk;

use std::cell::RefCell;

thread_local! {
    static FORM_METRIC_LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Append one `name key=value...` metric line to the thread-local buffer.
pub(crate) fn emit_form_metric_line(metric: &str, tail: &str) {
    let line = format!("{metric} {tail}");
    tracing::trace!(target: "order_entry::metrics", "{line}");
    FORM_METRIC_LINES.with(|lines| lines.borrow_mut().push(line));
}

/// Drain the metric lines emitted on the current thread.
pub fn take_form_metric_lines() -> Vec<String> {
    FORM_METRIC_LINES.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
}
