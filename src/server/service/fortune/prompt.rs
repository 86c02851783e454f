//! Instructions sent to the text and image models.

use crate::model::fortune::{FortuneResult, NarrativeKind, UserInput};

/// Written in place of an unknown birth time
pub static UNKNOWN_BIRTH_TIME: &str = "不明";

/// Builds the fortune instruction for the text model.
pub fn fortune_prompt(input: &UserInput) -> String {
    let birth_time = if input.birth_time.trim().is_empty() {
        UNKNOWN_BIRTH_TIME
    } else {
        input.birth_time.trim()
    };

    let summaries = NarrativeKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "・{}の最後は必ず「{}」という見出しで締め、その後に3つの箇条書きを続けること。",
                kind.title(),
                kind.summary_heading()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"あなたは「守護神占い」の最高級鑑定エンジンです。
空海、仏様、八百万の神、妖精、龍神、宇宙の神々など全156柱の中から、相談者の魂を守護する一柱を選び出し、プロの鑑定士として鑑定してください。

# 文章のルール
・本質、恋愛、仕事、命運の各項目は長文で書くこと。
・内容の比率はネガティブ80%、ポジティブ20%とし、相談者が目を背けてきた無意識のパターンを率直に指摘すること。
・一文ごとに「。」で区切り、読みやすい文章にすること。
{summaries}

# 運命の転機のルール
・統計学と易学に基づく80種の運命パターンから、相談者に当てはまるものを選ぶこと。
・各転機は具体的な年齢（例：7歳）を期間とし、説明の冒頭には他と重複しない見出しを付けること。

# 守護神のルール
・守護神の名前は短く格好良いものにすること（例：白銀の龍神、月読命、大天使ガブリエル）。10文字以内。
・守護神の外見は愛らしく描写し、画像生成用の詳細な外見描写も別途用意すること。

# 相談者の情報
・お名前：{name}
・生年月日：{birth_date}
・出生時刻：{birth_time}
・性別：{gender}

JSON形式で出力。"#,
        summaries = summaries,
        name = input.name.trim(),
        birth_date = input.birth_date.trim(),
        birth_time = birth_time,
        gender = input.gender.label(),
    )
}

/// Builds the portrait instruction for the image model from the decoded fortune.
pub fn portrait_prompt(result: &FortuneResult) -> String {
    format!(
        "Create a unique, high-quality \"Original Character Design\" of a Japanese Deity named \"{}\".\n{}\n",
        result.deity_name, result.deity_visual_description
    )
}
