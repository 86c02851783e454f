//! Fortune records as the text model would return them.

use serde_json::{json, Value};

/// Fortune record with `events` timeline entries.
///
/// Narrative sections carry their summary headings and unformatted sentence breaks, so
/// paragraph formatting has something to do.
pub fn fortune_json(events: usize) -> Value {
    let timeline: Vec<Value> = (0..events)
        .map(|i| {
            json!({
                "period": format!("{}歳", 7 + i * 12),
                "description": format!("【転機{}】環境が大きく変わる。 新しい縁が生まれる。", i + 1),
            })
        })
        .collect();

    json!({
        "deityName": "白銀の龍神",
        "deityTitle": "静寂を統べる者",
        "deityDescription": "銀色の鱗を持つ小さな龍。いつも眠そうにしている。",
        "deityVisualDescription": "A small silver dragon with sleepy eyes, soft moonlight, pastel colors",
        "essence": "あなたは人に合わせすぎる。 本音を隠す癖がある。【本質のまとめ】\n・我慢\n・遠慮\n・優しさ",
        "love": "恋愛では追いかけすぎる。相手に尽くしすぎる。【恋愛アドバイス】\n・距離\n・自立\n・信頼",
        "work": "仕事では完璧を求めすぎる。【向いている仕事・才能】\n・研究\n・編集\n・支援",
        "destiny": "試練の多い運命である。 しかし晩年に救いがある。【運命の傾向】\n・試練\n・転機\n・救済",
        "timeline": timeline,
        "luckyColor": "藤色",
        "guardianItem": "水晶の数珠",
        "soulConnection": "年上の友人",
    })
}

/// Fortune record without one of its mandatory fields.
pub fn fortune_json_without(field: &str) -> Value {
    let mut fortune = fortune_json(3);
    if let Some(object) = fortune.as_object_mut() {
        object.remove(field);
    }
    fortune
}

/// Request body for `POST /api/fortune`.
pub fn user_input_json(birth_date: &str, birth_time: &str, gender: &str, name: &str) -> Value {
    json!({
        "birthDate": birth_date,
        "birthTime": birth_time,
        "gender": gender,
        "name": name,
    })
}
