// ==========================================
// 巡馆值班表转换器 - 领域类型定义
// ==========================================
// 楼层 / 单日版式
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 楼层 (Floor)
// ==========================================
// 每个楼层在时间行中固定占两列: 二层 B/C, 三层 D/E, 四层 F/G
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Floor {
    #[serde(rename = "二层")]
    Second,
    #[serde(rename = "三层")]
    Third,
    #[serde(rename = "四层")]
    Fourth,
}

impl Floor {
    /// 按表格列顺序排列的全部楼层
    pub const ALL: [Floor; 3] = [Floor::Second, Floor::Third, Floor::Fourth];

    /// 楼层中文标签（即 JSON 中的 floor 值）
    pub fn label(&self) -> &'static str {
        match self {
            Floor::Second => "二层",
            Floor::Third => "三层",
            Floor::Fourth => "四层",
        }
    }

    /// 楼层首列（合并版式下唯一使用的列）
    pub fn primary_column(&self) -> usize {
        match self {
            Floor::Second => 1,
            Floor::Third => 3,
            Floor::Fourth => 5,
        }
    }

    /// 楼层第二时段列（仅正常版式使用）
    pub fn secondary_column(&self) -> usize {
        self.primary_column() + 1
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 单日版式 (Day Layout)
// ==========================================
// 二选一: 不存在"部分合并"的第三种版式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLayout {
    Merged, // 合并单元格: 每层一个时段
    Normal, // 正常单元格: 每层两个时段
}

impl DayLayout {
    /// 该版式下某楼层参与提取的列（按列序）
    pub fn columns_for(&self, floor: Floor) -> Vec<usize> {
        match self {
            DayLayout::Merged => vec![floor.primary_column()],
            DayLayout::Normal => vec![floor.primary_column(), floor.secondary_column()],
        }
    }
}

impl fmt::Display for DayLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLayout::Merged => write!(f, "MERGED"),
            DayLayout::Normal => write!(f, "NORMAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_columns() {
        assert_eq!(Floor::Second.primary_column(), 1);
        assert_eq!(Floor::Third.secondary_column(), 4);
        assert_eq!(Floor::Fourth.secondary_column(), 6);
    }

    #[test]
    fn test_floor_serializes_as_chinese_label() {
        let json = serde_json::to_string(&Floor::Third).unwrap();
        assert_eq!(json, "\"三层\"");
    }

    #[test]
    fn test_layout_columns() {
        assert_eq!(DayLayout::Merged.columns_for(Floor::Fourth), vec![5]);
        assert_eq!(DayLayout::Normal.columns_for(Floor::Second), vec![1, 2]);
    }
}
