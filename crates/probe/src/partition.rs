//! Supported / unsupported buckets.

use crate::outcome::ProbeOutcome;

/// Where an outcome ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Supported,
    Unsupported,
    /// Empty label or failed lookup; written nowhere.
    Dropped,
}

/// Display names split by platform support, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    supported: Vec<String>,
    unsupported: Vec<String>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts one outcome into a bucket.
    ///
    /// Empty labels are dropped whether they come from a failure or from
    /// the store itself.
    pub fn place(&mut self, outcome: &ProbeOutcome) -> Placement {
        let (label, supported) = outcome.classification();
        if label.is_empty() {
            return Placement::Dropped;
        }

        if supported {
            self.supported.push(label.to_string());
            Placement::Supported
        } else {
            self.unsupported.push(label.to_string());
            Placement::Unsupported
        }
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    pub fn unsupported(&self) -> &[String] {
        &self.unsupported
    }

    /// Total number of labels across both buckets.
    pub fn len(&self) -> usize {
        self.supported.len() + self.unsupported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ProbeFailure;

    #[test]
    fn labels_go_to_matching_bucket() {
        let mut p = Partition::new();
        assert_eq!(
            p.place(&ProbeOutcome::resolved("A", true)),
            Placement::Supported
        );
        assert_eq!(
            p.place(&ProbeOutcome::resolved("B", false)),
            Placement::Unsupported
        );
        assert_eq!(p.supported(), ["A"]);
        assert_eq!(p.unsupported(), ["B"]);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn empty_label_dropped_even_if_supported() {
        let mut p = Partition::new();
        assert_eq!(p.place(&ProbeOutcome::resolved("", true)), Placement::Dropped);
        assert_eq!(p.place(&ProbeOutcome::resolved("", false)), Placement::Dropped);
        assert!(p.is_empty());
    }

    #[test]
    fn failures_dropped() {
        let mut p = Partition::new();
        let placement = p.place(&ProbeOutcome::Failed(ProbeFailure::Transport(
            "connection refused".into(),
        )));
        assert_eq!(placement, Placement::Dropped);
        assert!(p.is_empty());
    }

    #[test]
    fn arrival_order_kept() {
        let mut p = Partition::new();
        for name in ["Z", "A", "M"] {
            p.place(&ProbeOutcome::resolved(name, true));
        }
        assert_eq!(p.supported(), ["Z", "A", "M"]);
        assert!(p.unsupported().is_empty());
    }
}
