/// Disk capacity bar.
use crate::model::format::percent_of;
use crate::model::Snapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum CapacityView {
    /// No totals were reported (or the disk claims zero capacity).
    Unknown,
    Known {
        used: u64,
        available: u64,
        total: u64,
        /// `used / total * 100`, the width of the filled bar.
        used_percent: f64,
    },
}

impl CapacityView {
    pub fn from_snapshot(snapshot: Option<&Snapshot>) -> Self {
        match snapshot {
            Some(s) => Self::from_totals(s.disk_total, s.disk_available),
            None => Self::Unknown,
        }
    }

    pub fn from_totals(total: Option<u64>, available: Option<u64>) -> Self {
        match (total, available) {
            (Some(total), Some(available)) if total > 0 => {
                let available = available.min(total);
                let used = total - available;
                Self::Known {
                    used,
                    available,
                    total,
                    used_percent: percent_of(used, total),
                }
            }
            _ => Self::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_free_disk_is_three_quarters_used() {
        let view = CapacityView::from_totals(Some(1000), Some(250));
        assert_eq!(
            view,
            CapacityView::Known {
                used: 750,
                available: 250,
                total: 1000,
                used_percent: 75.0,
            }
        );
    }

    #[test]
    fn missing_or_zero_totals_are_unknown() {
        assert_eq!(CapacityView::from_totals(None, Some(5)), CapacityView::Unknown);
        assert_eq!(CapacityView::from_totals(Some(5), None), CapacityView::Unknown);
        assert_eq!(CapacityView::from_totals(Some(0), Some(0)), CapacityView::Unknown);
        assert_eq!(CapacityView::from_snapshot(None), CapacityView::Unknown);
    }

    #[test]
    fn available_is_clamped_to_total() {
        let view = CapacityView::from_totals(Some(100), Some(400));
        assert!(matches!(view, CapacityView::Known { used: 0, available: 100, .. }));
    }
}
