use std::fs;

use kondate_extract::render::split_lines;
use kondate_extract::{DayRecord, MenuDocument, Vocabulary, build_records, merge_menu_file};

const RENDERED_PAGE: &str = "                 令和7年2月 こんだて  A                 給食センター
 日 曜   こんだてめい                        エネルギー たんぱく質 塩分

 2  月  ごはん  ちくぜんに  あったかじる   ぎゅうにゅう      553   26.1   2.3
        にんじん ねぎ


 3  火  ごはん  とりにくとさといものにつけ  ふくまめ     604   25.7   1.5
        もやしとじゃこのごまいため
        骨に注意して食べましょう。

５  木  コッペパン  だいずのミートソースに フレンチサラダ  ６２７  ２６．７  ３．３
";

fn record(
    day: u32,
    weekday: &str,
    staple: &str,
    dishes: &[&str],
    nutrition: (u32, f64, f64),
) -> DayRecord {
    DayRecord {
        day,
        weekday: weekday.to_string(),
        staple: staple.to_string(),
        dishes: dishes.iter().map(|d| d.to_string()).collect(),
        calories: Some(nutrition.0),
        protein: Some(nutrition.1),
        salt: Some(nutrition.2),
    }
}

#[test]
fn extracts_every_day_of_a_rendered_page() {
    let lines = split_lines(RENDERED_PAGE);
    let records = build_records(&lines, &Vocabulary::STANDARD);

    assert_eq!(
        records,
        vec![
            record(2, "月", "ごはん", &["ちくぜんに", "あったかじる"], (553, 26.1, 2.3)),
            record(
                3,
                "火",
                "ごはん",
                &["とりにくとさといものにつけ", "ふくまめ", "もやしとじゃこのごまいため"],
                (604, 25.7, 1.5),
            ),
            record(
                5,
                "木",
                "コッペパン",
                &["だいずのミートソースに", "フレンチサラダ"],
                (627, 26.7, 3.3),
            ),
        ]
    );
}

#[test]
fn page_without_day_rows_gives_no_records() {
    let lines = split_lines("令和7年2月 こんだて\n給食センター\n");
    assert!(build_records(&lines, &Vocabulary::STANDARD).is_empty());
}

#[test]
fn extracted_month_merges_into_collection_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("menu-data.json");
    let lines = split_lines(RENDERED_PAGE);
    let items = build_records(&lines, &Vocabulary::STANDARD);
    let menu = MenuDocument::new("2025-02", "A", "2月のこんだて", "menu-source.pdf", items).unwrap();

    merge_menu_file(&path, &menu).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    merge_menu_file(&path, &menu).unwrap();
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);

    let root: serde_json::Value = serde_json::from_str(&second).unwrap();
    let menus = root["menus"].as_array().unwrap();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0]["id"], "2025-02-a");
    assert_eq!(menus[0]["items"].as_array().unwrap().len(), 3);
    assert_eq!(menus[0]["items"][2]["staple"], "コッペパン");
}
