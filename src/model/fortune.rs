//! Fortune request and result types.
//!
//! [`UserInput`] travels from the browser form to `POST /api/fortune`, and [`FortuneResult`]
//! travels back. Both use camelCase field names on the wire, matching the response schema the
//! generative model is instructed to follow, so the model's JSON decodes straight into
//! [`FortuneResult`].

use serde::{Deserialize, Serialize};

/// Gender selected on the input form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
    Other,
}

impl Gender {
    /// All variants in the order the form shows them
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];

    /// Label shown on the form and written into the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "女性",
            Gender::Male => "男性",
            Gender::Other => "その他",
        }
    }

    /// Value used for the radio input
    pub fn value(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        }
    }
}

/// Birth data submitted by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// Birth date as entered (`YYYY-MM-DD` from the date input)
    pub birth_date: String,
    /// Birth time as entered, empty when unknown
    #[serde(default)]
    pub birth_time: String,
    pub gender: Gender,
    /// Display name or nickname
    pub name: String,
}

impl UserInput {
    /// Builds the submission from the live form values.
    ///
    /// Returns `None` when the birth date or the name is empty, in which case the form must do
    /// nothing at all.
    pub fn from_form(
        birth_date: &str,
        birth_time: &str,
        gender: Gender,
        name: &str,
    ) -> Option<Self> {
        let input = Self {
            birth_date: birth_date.trim().to_string(),
            birth_time: birth_time.trim().to_string(),
            gender,
            name: name.trim().to_string(),
        };

        input.missing_field().is_none().then_some(input)
    }

    /// Name of the first required field that is empty, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.birth_date.trim().is_empty() {
            Some("birthDate")
        } else if self.name.trim().is_empty() {
            Some("name")
        } else {
            None
        }
    }
}

/// One turning point on the life timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TimelineEvent {
    /// Age or life stage, e.g. `7歳`
    pub period: String,
    pub description: String,
}

/// The fortune record returned by the generative model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FortuneResult {
    pub deity_name: String,
    pub deity_title: String,
    pub deity_description: String,
    pub deity_visual_description: String,
    /// Portrait as a `data:` URI, absent when image generation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deity_image: Option<String>,
    pub essence: String,
    pub love: String,
    pub work: String,
    pub destiny: String,
    pub timeline: Vec<TimelineEvent>,
    pub lucky_color: String,
    pub guardian_item: String,
    pub soul_connection: String,
}

/// The four long-form narrative sections of a fortune, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeKind {
    Essence,
    Love,
    Work,
    Destiny,
}

impl NarrativeKind {
    pub const ALL: [NarrativeKind; 4] = [
        NarrativeKind::Essence,
        NarrativeKind::Love,
        NarrativeKind::Work,
        NarrativeKind::Destiny,
    ];

    /// JSON field holding the section text
    pub fn field(&self) -> &'static str {
        match self {
            NarrativeKind::Essence => "essence",
            NarrativeKind::Love => "love",
            NarrativeKind::Work => "work",
            NarrativeKind::Destiny => "destiny",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NarrativeKind::Essence => "あなたの本質・深層心理",
            NarrativeKind::Love => "愛の運命・結末",
            NarrativeKind::Work => "仕事・天職・成功",
            NarrativeKind::Destiny => "命運・人生の試練と救済",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NarrativeKind::Essence => "🔮",
            NarrativeKind::Love => "❤️",
            NarrativeKind::Work => "🕊️",
            NarrativeKind::Destiny => "🌠",
        }
    }

    /// Labeled heading the section must end with, followed by three bullet points
    pub fn summary_heading(&self) -> &'static str {
        match self {
            NarrativeKind::Essence => "【本質のまとめ】",
            NarrativeKind::Love => "【恋愛アドバイス】",
            NarrativeKind::Work => "【向いている仕事・才能】",
            NarrativeKind::Destiny => "【運命の傾向】",
        }
    }
}

/// A narrative section paired with its text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Narrative<'a> {
    pub kind: NarrativeKind,
    pub content: &'a str,
}

/// A short labeled fact shown in the summary tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Badge<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

/// What to show in the portrait frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Portrait<'a> {
    Image(&'a str),
    Placeholder,
}

impl FortuneResult {
    /// Narrative sections in display order: essence, love, work, destiny
    pub fn sections(&self) -> [Narrative<'_>; 4] {
        NarrativeKind::ALL.map(|kind| Narrative {
            kind,
            content: self.narrative(kind),
        })
    }

    pub fn narrative(&self, kind: NarrativeKind) -> &str {
        match kind {
            NarrativeKind::Essence => &self.essence,
            NarrativeKind::Love => &self.love,
            NarrativeKind::Work => &self.work,
            NarrativeKind::Destiny => &self.destiny,
        }
    }

    pub fn narrative_mut(&mut self, kind: NarrativeKind) -> &mut String {
        match kind {
            NarrativeKind::Essence => &mut self.essence,
            NarrativeKind::Love => &mut self.love,
            NarrativeKind::Work => &mut self.work,
            NarrativeKind::Destiny => &mut self.destiny,
        }
    }

    /// Lucky color, guardian item and soul connection, in that order
    pub fn badges(&self) -> [Badge<'_>; 3] {
        [
            Badge {
                label: "ラッキーカラー",
                value: &self.lucky_color,
            },
            Badge {
                label: "守護アイテム",
                value: &self.guardian_item,
            },
            Badge {
                label: "魂の縁が深い人",
                value: &self.soul_connection,
            },
        ]
    }

    pub fn portrait(&self) -> Portrait<'_> {
        match self.deity_image.as_deref() {
            Some(uri) if !uri.is_empty() => Portrait::Image(uri),
            _ => Portrait::Placeholder,
        }
    }

    /// Narrative sections whose text lacks their labeled summary heading
    pub fn missing_summaries(&self) -> Vec<NarrativeKind> {
        NarrativeKind::ALL
            .into_iter()
            .filter(|kind| !self.narrative(*kind).contains(kind.summary_heading()))
            .collect()
    }
}

/// Progress shown while a fortune is being generated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub message: String,
}
