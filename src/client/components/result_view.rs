use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBolt, FaRotateLeft};
use dioxus_free_icons::Icon;

use crate::model::fortune::{FortuneResult, Portrait, TimelineEvent};

const CARD_CLASS: &str = "bg-white p-6 md:p-8 rounded-xl shadow-sm border border-beige-200 mb-8 fade-in";
const CARD_TITLE_CLASS: &str = "text-xl md:text-2xl font-serif font-bold text-stone-700 border-b-2 pb-2 border-beige-300";

#[component]
pub fn ResultView(result: FortuneResult, on_reset: EventHandler<()>) -> Element {
    rsx!(
        div { class: "w-full max-w-4xl mx-auto pb-12",
            DeityProfile { result: result.clone() }
            div { class: "space-y-6",
                for section in result.sections() {
                    SectionCard {
                        key: "{section.kind.field()}",
                        title: section.kind.title(),
                        icon: section.kind.icon(),
                        content: section.content.to_string(),
                    }
                }
                TimelineSection { timeline: result.timeline.clone() }
            }
            div { class: "mt-16 text-center",
                p { class: "text-stone-500 mb-4 font-sans text-sm",
                    "鑑定結果は、あなたの心の奥底に届きましたか？"
                }
                button {
                    class: "bg-stone-700 hover:bg-stone-800 text-white px-10 py-4 rounded-full font-serif text-lg transition-all shadow-md hover:shadow-xl hover:-translate-y-1 inline-flex items-center gap-3",
                    onclick: move |_| on_reset.call(()),
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaRotateLeft
                    }
                    "もう一度占う"
                }
            }
        }
    )
}

#[component]
fn DeityProfile(result: FortuneResult) -> Element {
    rsx!(
        div { class: "bg-beige-50 border border-beige-200 p-8 rounded-2xl shadow-lg mb-12 text-center relative overflow-hidden fade-in",
            div { class: "absolute top-0 left-0 w-full h-3 bg-gradient-to-r from-beige-300 via-beige-500 to-beige-300" }
            p { class: "text-stone-500 font-serif mb-3 text-sm tracking-[0.2em] mt-2",
                "あなたの魂を守護する存在"
            }
            h2 { class: "text-3xl md:text-5xl font-serif font-bold text-stone-800 mb-3 drop-shadow-sm",
                "{result.deity_name}"
            }
            p { class: "text-beige-600 font-serif text-lg md:text-xl mb-8 italic",
                "— {result.deity_title} —"
            }
            div { class: "flex flex-col items-center justify-center mb-8",
                div { class: "w-48 h-48 md:w-56 md:h-56 bg-white rounded-full flex items-center justify-center shadow-inner border-[6px] border-beige-100 mb-6 relative overflow-hidden group",
                    {match result.portrait() {
                        Portrait::Image(src) => rsx!(
                            img {
                                src: "{src}",
                                alt: "{result.deity_name}",
                                class: "w-full h-full object-cover hover:scale-105 transition-transform duration-700",
                            }
                        ),
                        Portrait::Placeholder => rsx!(
                            span { class: "text-6xl animate-pulse", "✨" }
                        ),
                    }}
                }
                p { class: "text-stone-600 font-sans max-w-lg mx-auto leading-relaxed bg-white/50 p-4 rounded-xl text-sm md:text-base",
                    "{result.deity_description}"
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-3 text-sm font-sans text-stone-500 mt-6",
                for badge in result.badges() {
                    InfoBadge {
                        key: "{badge.label}",
                        label: badge.label,
                        value: badge.value.to_string(),
                    }
                }
            }
        }
    )
}

#[component]
fn InfoBadge(label: &'static str, value: String) -> Element {
    rsx!(
        div { class: "flex flex-col items-center p-4 bg-white/60 rounded-lg border border-beige-100 shadow-sm flex-1 min-w-[140px]",
            span { class: "text-xs text-stone-500 font-sans mb-1", "{label}" }
            span { class: "font-serif font-bold text-stone-700 text-center", "{value}" }
        }
    )
}

/// Narrative section, rendered with its inserted line breaks preserved
#[component]
fn SectionCard(title: &'static str, icon: &'static str, content: String) -> Element {
    rsx!(
        div { class: CARD_CLASS,
            div { class: "flex items-center justify-center mb-6",
                span { class: "text-3xl mr-3", "{icon}" }
                h3 { class: CARD_TITLE_CLASS, "{title}" }
            }
            div { class: "prose prose-stone max-w-none",
                p { class: "text-stone-600 leading-8 whitespace-pre-wrap font-sans text-base md:text-lg text-justify tracking-wide",
                    "{content}"
                }
            }
        }
    )
}

#[component]
fn TimelineSection(timeline: Vec<TimelineEvent>) -> Element {
    rsx!(
        div { class: CARD_CLASS,
            div { class: "flex items-center justify-center mb-6 gap-3",
                Icon {
                    width: 28,
                    height: 28,
                    icon: FaBolt
                }
                h3 { class: CARD_TITLE_CLASS, "運命の転機" }
            }
            ol { class: "relative border-l-2 border-beige-300 ml-4 md:ml-6 space-y-10 py-4",
                for (index, event) in timeline.iter().enumerate() {
                    li { key: "{index}", class: "relative pl-6 md:pl-8",
                        div { class: "absolute -left-[9px] top-1 w-4 h-4 rounded-full bg-beige-500 border-4 border-white shadow-sm ring-1 ring-beige-200" }
                        h4 { class: "font-serif font-bold text-xl text-stone-800 mb-2",
                            "{event.period}"
                        }
                        p { class: "text-stone-600 font-sans text-sm md:text-base leading-relaxed bg-stone-50 p-4 rounded-lg border border-stone-100 shadow-inner",
                            "{event.description}"
                        }
                    }
                }
            }
        }
    )
}
