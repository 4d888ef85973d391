// ==========================================
// 巡馆值班表转换器 - 单元格清洗
// ==========================================
// 职责: TRIM / 空名占位
// ==========================================

use crate::domain::{Cell, EMPTY_NAME_PLACEHOLDER};

pub struct CellCleaner;

impl CellCleaner {
    /// 单元格文本 TRIM 后的结果（Empty → None）
    pub fn clean_text(&self, cell: &Cell) -> Option<String> {
        cell.render().map(|s| s.trim().to_string())
    }

    /// 标准化 NULL 值（空白 → None）
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 清洗人名: 空白名替换为占位符
    pub fn clean_name(&self, value: &str) -> String {
        self.normalize_null(Some(value.to_string()))
            .unwrap_or_else(|| EMPTY_NAME_PLACEHOLDER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_basic() {
        let cleaner = CellCleaner;
        assert_eq!(cleaner.clean_text(&Cell::text("  9-12  ")).as_deref(), Some("9-12"));
        assert_eq!(cleaner.clean_text(&Cell::Number(9.0)).as_deref(), Some("9.0"));
        assert_eq!(cleaner.clean_text(&Cell::text("   ")).as_deref(), Some(""));
        assert_eq!(cleaner.clean_text(&Cell::Empty), None);
    }

    #[test]
    fn test_clean_name_placeholder() {
        let cleaner = CellCleaner;
        assert_eq!(cleaner.clean_name("张三"), "张三");
        assert_eq!(cleaner.clean_name(""), "空");
        assert_eq!(cleaner.clean_name(" \t "), "空");
    }
}
