use super::*;

#[test]
fn stat_tiles_group_large_counters() {
    let stats = TaskStats { total: 1_234_567, completed: 1_000, ..TaskStats::default() };
    let tiles = stat_tiles(&stats);
    assert_eq!(tiles[0], ("Всего", "1 234 567".to_owned()));
    assert!(tiles.iter().any(|(label, value)| *label == "Опубликованы" && value == "1 000"));
}

#[test]
fn stat_tiles_render_success_rate_with_one_decimal() {
    let stats = TaskStats { success_rate: 88.88, ..TaskStats::default() };
    let tiles = stat_tiles(&stats);
    assert_eq!(tiles.last().expect("tiles are never empty"), &("Успешность", "88.9%".to_owned()));
}

#[test]
fn stat_tiles_keep_display_order() {
    let tiles = stat_tiles(&TaskStats::default());
    let labels: Vec<_> = tiles.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        ["Всего", "Ожидают", "Запланированы", "Опубликованы", "Ошибки", "Успешность"]
    );
}
