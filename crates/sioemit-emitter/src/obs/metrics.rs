//! Minimal counter registry for the emitter.
//!
//! Labels are flattened into sorted key vectors to keep deterministic
//! ordering. Rendering sorts series so output is stable across runs.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Emitter counters, labelled by namespace.
#[derive(Default)]
pub struct EmitterMetrics {
    pub emit_total: CounterVec,
    pub publish_total: CounterVec,
    pub publish_fail_total: CounterVec,
}

impl EmitterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.emit_total.render("sioemit_emit_total", &mut out);
        self.publish_total.render("sioemit_publish_total", &mut out);
        self.publish_fail_total.render("sioemit_publish_fail_total", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn label_order_does_not_matter() {
        let c = CounterVec::default();
        c.inc(&[("nsp", "/"), ("a", "b")]);
        c.add(&[("a", "b"), ("nsp", "/")], 2);
        assert_eq!(c.get(&[("nsp", "/"), ("a", "b")]), 3);
        assert_eq!(c.get(&[("nsp", "/other")]), 0);
    }

    #[test]
    fn render_is_prometheus_text() {
        let m = EmitterMetrics::new();
        m.publish_total.inc(&[("nsp", "/chat")]);
        m.publish_total.inc(&[("nsp", "/")]);
        let out = m.render();
        assert!(out.contains("# TYPE sioemit_publish_total counter\n"));
        assert!(out.contains(
            "sioemit_publish_total{nsp=\"/\"} 1\nsioemit_publish_total{nsp=\"/chat\"} 1\n"
        ));
        assert!(out.contains("# TYPE sioemit_emit_total counter\n"));
    }
}
