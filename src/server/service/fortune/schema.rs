//! Response schema constraining the text model's JSON output.

use serde_json::{json, Value};

/// Fields the model must always produce, in schema order
pub const REQUIRED_FIELDS: [&str; 12] = [
    "deityName",
    "deityTitle",
    "deityDescription",
    "deityVisualDescription",
    "essence",
    "love",
    "work",
    "destiny",
    "timeline",
    "luckyColor",
    "guardianItem",
    "soulConnection",
];

fn string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn narrative(label: &str, heading: &str, focus: &str) -> Value {
    string(&format!(
        "{}Long text. Negative 80%, Positive 20%. MUST END with '{}' followed by 3 distinct bullet points {}.",
        label, heading, focus
    ))
}

/// Gemini response schema for a fortune record, covering every field but the portrait.
pub fn fortune_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "deityName": string("Name of the Guardian Deity. Selected from 156 types. Must be SHORT and COOL (e.g., '白銀の龍神', '月読命', '大天使ガブリエル'). Max 10 characters."),
            "deityTitle": string("A short, mystical title for the deity."),
            "deityDescription": string("A description of the deity's personality and cute appearance."),
            "deityVisualDescription": string("A detailed visual description for image generation."),
            "essence": narrative("【本質】", "【本質のまとめ】", "exposing subconscious patterns"),
            "love": narrative("【恋愛】", "【恋愛アドバイス】", "focusing on fate and ending"),
            "work": narrative("【仕事】", "【向いている仕事・才能】", "on qualities and environment"),
            "destiny": narrative("【命運】", "【運命の傾向】", "on trials and salvation"),
            "timeline": {
                "type": "ARRAY",
                "description": "【運命の転機】Detailed life timeline. MUST follow the strict '80 Patterns' and 'Yi Jing' rules defined in the instruction.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "period": string("Specific age (e.g., '7歳')."),
                        "description": string("Must include a UNIQUE HEADER followed by the event description."),
                    },
                    "required": ["period", "description"],
                },
            },
            "luckyColor": { "type": "STRING" },
            "guardianItem": { "type": "STRING" },
            "soulConnection": { "type": "STRING" },
        },
        "required": REQUIRED_FIELDS,
    })
}
