//! Read-only series handed to the chart widgets. Nothing here mutates after
//! a dashboard is seeded.

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: &str, points: &[(&str, u64)]) -> Self {
        Self {
            name: name.to_string(),
            points: points
                .iter()
                .map(|(label, value)| ChartPoint {
                    label: (*label).to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn bar_data(&self) -> Vec<(&str, u64)> {
        self.points
            .iter()
            .map(|point| (point.label.as_str(), point.value))
            .collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.points.iter().map(|point| point.value).collect()
    }

    pub fn max_value(&self) -> u64 {
        self.points.iter().map(|point| point.value).max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|point| point.value).sum()
    }

    /// Share of `label` in the whole series, rounded down to a percent.
    pub fn share_percent(&self, label: &str) -> u64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        self.points
            .iter()
            .find(|point| point.label == label)
            .map(|point| point.value * 100 / total)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentLoad {
    pub department: String,
    pub issues: u64,
    pub resolved: u64,
}

impl DepartmentLoad {
    pub fn efficiency_percent(&self) -> u64 {
        if self.issues == 0 {
            return 100;
        }
        self.resolved.min(self.issues) * 100 / self.issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub positive: bool,
}
