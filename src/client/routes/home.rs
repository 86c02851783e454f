use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{FailureNotice, InputForm, LoadingOverlay, Page, ResultView, SiteHeader},
    store::fortune::{FortuneStore, Phase},
};
use crate::model::fortune::UserInput;

#[component]
fn Introduction() -> Element {
    rsx!(
        div { class: "max-w-xl mx-auto text-center mb-10 text-stone-600 font-sans bg-white/60 p-6 md:p-8 rounded-2xl border border-beige-100 shadow-sm backdrop-blur-md",
            div { class: "space-y-6",
                p { class: "text-balance leading-loose text-sm md:text-base",
                    "空海、仏様、八百万の神、妖精、龍神、宇宙の神々..."
                    br { class: "hidden md:block" }
                    strong { class: "text-stone-800 text-lg mx-1", "全156柱" }
                    "の愛らしくも偉大な存在たち。"
                }
                p { class: "text-balance leading-loose text-sm md:text-base",
                    "あなたの生年月日から、魂を守護する一柱を導き出し"
                    br { class: "hidden md:block" }
                    "本質・恋愛・仕事・命運を"
                    span { class: "border-b border-beige-400 pb-1 font-bold text-stone-700 mx-1",
                        "プロ級の精度"
                    }
                    "で鑑定します。"
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    let mut store = use_context::<Signal<FortuneStore>>();

    let on_submit = move |input: UserInput| {
        let Some(token) = store.write().submit() else {
            return;
        };

        tracing::debug!("Requesting fortune for {}", input.name);

        #[cfg(feature = "web")]
        {
            use crate::client::{store::fortune::NARRATION, util::request_fortune};

            for step in NARRATION.into_iter().skip(1) {
                spawn(async move {
                    gloo_timers::future::TimeoutFuture::new(step.delay_ms).await;
                    store.write().narrate(token, step.message);
                });
            }

            spawn(async move {
                match request_fortune(&input).await {
                    Ok(fortune) => {
                        store.write().succeed(token, fortune);
                    }
                    Err(err) => {
                        tracing::error!("Fortune request failed: {}", err);
                        store.write().fail(token);
                    }
                }
            });
        }

        #[cfg(not(feature = "web"))]
        {
            tracing::error!("No fortune transport for {} on this platform", input.name);
            store.write().fail(token);
        }
    };

    let on_reset = move |_: ()| {
        if store.write().reset() {
            let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
        }
    };

    let phase = store.read().phase().clone();
    let loading_message = store.read().loading().message.clone();
    let notice = store.read().notice();
    let idle = phase == Phase::Idle;

    rsx!(
        Title { "守護神占い | Guardian Deity Fortune" }
        Meta {
            name: "description",
            content: "生年月日から、あなたの魂を守護する神様と本質・恋愛・仕事・命運を鑑定します。"
        }
        Page {
            SiteHeader { show_ensemble: idle }
            main { class: "flex-grow container mx-auto px-4 z-10 py-2",
                {match phase {
                    Phase::Idle => rsx!(
                        div { class: "flex flex-col items-center",
                            Introduction {}
                            InputForm { on_submit }
                        }
                    ),
                    Phase::Loading => rsx!(
                        LoadingOverlay { message: loading_message }
                    ),
                    Phase::Result(result) => rsx!(
                        ResultView { result, on_reset }
                    ),
                }}
            }
            if let Some(message) = notice {
                FailureNotice {
                    message,
                    on_dismiss: move |_| store.write().dismiss_notice(),
                }
            }
        }
    )
}
