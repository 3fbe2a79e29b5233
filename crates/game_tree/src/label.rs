//! Node labels.
//!
//! A label is a bijective base-26 letter run for the node's 1-based position
//! followed by `existing / 26 + 1`, where `existing` counts the nodes labeled
//! before it. The suffix bumps at 26, 52, ... while the letters roll over
//! after 26, 702, ... so the two parts drift apart (`Z1`, `AA2`, `AZ2`, `BA3`).
//! Consumers match on these exact strings; keep the scheme as is.

const LETTERS: u32 = 26;

/// Label for the node that follows `existing` already-labeled nodes.
pub fn label_for(existing: usize) -> String {
    let mut letters = Vec::new();
    let mut count = existing + 1;
    while count > 0 {
        let rem = (count - 1) % LETTERS as usize;
        count = (count - 1) / LETTERS as usize;
        letters.push((b'A' + rem as u8) as char);
    }
    let mut label: String = letters.into_iter().rev().collect();
    label.push_str(&(existing / LETTERS as usize + 1).to_string());
    label
}

/// Hands out labels in issue order.
#[derive(Debug, Clone, Default)]
pub struct LabelGenerator {
    issued: usize,
}

impl LabelGenerator {
    pub fn new() -> Self {
        Self { issued: 0 }
    }

    /// Number of labels handed out so far.
    pub fn issued(&self) -> usize {
        self.issued
    }

    pub fn next_label(&mut self) -> String {
        let label = label_for(self.issued);
        self.issued += 1;
        label
    }
}

impl Iterator for LabelGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_label())
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod label_tests;
