// ==========================================
// 行对解析引擎集成测试
// ==========================================
// 测试目标: 验证值班表场景与解析性质
// ==========================================


use patrol_roster::engine::RowPairInterpreter;
use patrol_roster::logging;
use patrol_roster::{interpret, Cell, DayLayout, DutyEntry, Floor, Grid};
use test_helpers::{e, grid_with, n, sample_week_grid, t};

fn scenario_time_row() -> Vec<Cell> {
    vec![n(12.07), t("9-12"), e(), t("13-17"), e(), t("9-17"), e()]
}

fn scenario_name_row() -> Vec<Cell> {
    vec![t(""), t("张三"), e(), t("李四"), e(), t("王五"), e()]
}

#[test]
fn test_scenario_merged_layout() {
    logging::init_test();

    let grid = grid_with(vec![scenario_time_row(), scenario_name_row()]);
    let schedule = interpret(&grid, "2025", "09");

    let json = serde_json::to_string(&schedule).unwrap();
    assert_eq!(
        json,
        r#"{"2025-09-07":[{"floor":"二层","time":"9-12","name":"张三"},{"floor":"三层","time":"13-17","name":"李四"},{"floor":"四层","time":"9-17","name":"王五"}]}"#
    );
}

#[test]
fn test_scenario_normal_layout() {
    let mut time_row = scenario_time_row();
    time_row[2] = t("14-17");
    let mut name_row = scenario_name_row();
    name_row[2] = t("赵六");

    assert_eq!(RowPairInterpreter::detect_layout(&time_row), DayLayout::Normal);

    let grid = grid_with(vec![time_row, name_row]);
    let schedule = interpret(&grid, "2025", "09");

    let second_floor: Vec<&DutyEntry> = schedule
        .get("2025-09-07")
        .unwrap()
        .iter()
        .filter(|entry| entry.floor == Floor::Second)
        .collect();
    assert_eq!(second_floor.len(), 2);
    assert_eq!(second_floor[0].time, "9-12");
    assert_eq!(second_floor[1].time, "14-17");
    assert_eq!(second_floor[1].name, "赵六");
}

#[test]
fn test_scenario_invalid_day() {
    let mut time_row = scenario_time_row();
    time_row[0] = n(45.99);

    let grid = grid_with(vec![time_row, scenario_name_row()]);
    let schedule = interpret(&grid, "2025", "09");

    assert!(schedule.is_empty());
}

#[test]
fn test_scenario_blank_name() {
    let mut name_row = scenario_name_row();
    name_row[1] = t(" \t ");

    let grid = grid_with(vec![scenario_time_row(), name_row]);
    let schedule = interpret(&grid, "2025", "09");

    assert_eq!(
        schedule.get("2025-09-07").unwrap()[0],
        DutyEntry::new(Floor::Second, "9-12", "空")
    );
}

#[test]
fn test_scenario_three_rows_only() {
    let grid = grid_with(vec![scenario_time_row()]);
    assert_eq!(grid.row_count(), 3);

    let schedule = interpret(&grid, "2025", "09");

    assert!(schedule.is_empty());
    assert_eq!(serde_json::to_string(&schedule).unwrap(), "{}");
}

#[test]
fn test_empty_grid() {
    let schedule = interpret(&Grid::default(), "2025", "09");
    assert!(schedule.is_empty());
}

#[test]
fn test_sample_week() {
    let schedule = interpret(&sample_week_grid(), "2025", "09");

    assert_eq!(
        schedule.dates().collect::<Vec<_>>(),
        vec!["2025-09-01", "2025-09-02", "2025-09-04"]
    );

    let summary = schedule.summary();
    assert_eq!(summary.days, 3);
    assert_eq!(summary.total_entries, 15);
    assert_eq!(summary.merged_days, 1);
    assert_eq!(summary.normal_days, 2);

    // 名称永不为空串
    for (_, entries) in schedule.iter() {
        for entry in entries {
            assert!(!entry.name.is_empty());
            assert!(!entry.time.is_empty());
        }
    }
    assert!(schedule.get("2025-09-04").unwrap()[0].is_vacant());
}

#[test]
fn test_entry_count_bounds() {
    let schedule = interpret(&sample_week_grid(), "2025", "09");

    for (date, entries) in schedule.iter() {
        assert!(entries.len() <= 6, "{} has {} entries", date, entries.len());
    }
    assert_eq!(schedule.get("2025-09-01").unwrap().len(), 3);
}

#[test]
fn test_layout_re_evaluated_per_pair() {
    // 合并与正常版式交替出现
    let grid = grid_with(vec![
        vec![n(9.01), t("9-12"), t("13-17"), t("9-12"), t("13-17"), t("9-12"), t("13-17")],
        vec![e(), t("甲"), t("乙"), t("丙"), t("丁"), t("戊"), t("己")],
        scenario_time_row(),
        scenario_name_row(),
        vec![n(9.08), t("9-12"), t("13-17"), t("9-12"), t("13-17"), t("9-12"), t("13-17")],
        vec![e(), t("甲"), t("乙"), t("丙"), t("丁"), t("戊"), t("己")],
    ]);

    let schedule = interpret(&grid, "2025", "09");

    assert_eq!(schedule.get("2025-09-01").unwrap().len(), 6);
    assert_eq!(schedule.get("2025-09-07").unwrap().len(), 3);
    assert_eq!(schedule.get("2025-09-08").unwrap().len(), 6);
}
