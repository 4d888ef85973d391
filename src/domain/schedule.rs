// ==========================================
// 巡馆值班表转换器 - 排班结果
// ==========================================
// 职责: 日期 → 值班条目序列 的有序映射
// 约定: 日期键与条目均保持发现顺序; 同一日期多次出现时追加而非覆盖
// ==========================================

use crate::domain::types::Floor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 空名占位符
pub const EMPTY_NAME_PLACEHOLDER: &str = "空";

// ==========================================
// DutyEntry - 值班条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyEntry {
    pub floor: Floor,
    pub time: String,
    pub name: String,
}

impl DutyEntry {
    pub fn new(floor: Floor, time: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            floor,
            time: time.into(),
            name: name.into(),
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.name == EMPTY_NAME_PLACEHOLDER
    }
}

// ==========================================
// Schedule - 排班结果
// ==========================================
// 序列化为 JSON 对象, 键顺序即插入顺序
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    days: IndexMap<String, Vec<DutyEntry>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取日期对应的条目序列，首次使用时创建
    pub fn day_mut(&mut self, date_key: &str) -> &mut Vec<DutyEntry> {
        self.days.entry(date_key.to_string()).or_default()
    }

    pub fn push(&mut self, date_key: &str, entry: DutyEntry) {
        self.day_mut(date_key).push(entry);
    }

    pub fn get(&self, date_key: &str) -> Option<&[DutyEntry]> {
        self.days.get(date_key).map(Vec::as_slice)
    }

    pub fn contains_date(&self, date_key: &str) -> bool {
        self.days.contains_key(date_key)
    }

    /// 日期键（发现顺序）
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DutyEntry])> {
        self.days
            .iter()
            .map(|(date, entries)| (date.as_str(), entries.as_slice()))
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn entry_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_schedule(self)
    }
}

// ==========================================
// ScheduleSummary - 转换统计
// ==========================================
// 合并/正常天数按条目数估算: 3 条视为合并版式, 6 条视为正常版式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub days: usize,
    pub total_entries: usize,
    pub normal_days: usize,
    pub merged_days: usize,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut summary = Self {
            days: schedule.day_count(),
            total_entries: schedule.entry_count(),
            ..Self::default()
        };
        for (_, entries) in schedule.iter() {
            match entries.len() {
                3 => summary.merged_days += 1,
                6 => summary.normal_days += 1,
                _ => {}
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_date_accumulates() {
        let mut schedule = Schedule::new();
        schedule.push("2025-09-01", DutyEntry::new(Floor::Second, "9-12", "张三"));
        schedule.push("2025-09-02", DutyEntry::new(Floor::Third, "9-12", "李四"));
        schedule.push("2025-09-01", DutyEntry::new(Floor::Fourth, "13-17", "王五"));

        assert_eq!(schedule.day_count(), 2);
        assert_eq!(schedule.get("2025-09-01").unwrap().len(), 2);
        assert_eq!(
            schedule.dates().collect::<Vec<_>>(),
            vec!["2025-09-01", "2025-09-02"]
        );
    }

    #[test]
    fn test_serialize_preserves_insertion_order() {
        let mut schedule = Schedule::new();
        schedule.push("2025-09-07", DutyEntry::new(Floor::Second, "9-12", "张三"));
        schedule.push("2025-09-01", DutyEntry::new(Floor::Second, "9-12", "空"));

        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(
            json,
            r#"{"2025-09-07":[{"floor":"二层","time":"9-12","name":"张三"}],"2025-09-01":[{"floor":"二层","time":"9-12","name":"空"}]}"#
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut schedule = Schedule::new();
        for floor in Floor::ALL {
            schedule.push("2025-09-01", DutyEntry::new(floor, "9-17", "张三"));
        }
        for floor in Floor::ALL {
            schedule.push("2025-09-02", DutyEntry::new(floor, "9-12", "李四"));
            schedule.push("2025-09-02", DutyEntry::new(floor, "13-17", "王五"));
        }
        schedule.push("2025-09-03", DutyEntry::new(Floor::Second, "9-12", "赵六"));
        schedule.day_mut("2025-09-04");

        let summary = schedule.summary();
        assert_eq!(summary.days, 4);
        assert_eq!(summary.total_entries, 10);
        assert_eq!(summary.merged_days, 1);
        assert_eq!(summary.normal_days, 1);
    }

    #[test]
    fn test_vacant_entry() {
        assert!(DutyEntry::new(Floor::Second, "9-12", EMPTY_NAME_PLACEHOLDER).is_vacant());
        assert!(!DutyEntry::new(Floor::Second, "9-12", "张三").is_vacant());
    }
}
