use dioxus::prelude::*;

use crate::model::fortune::{Gender, UserInput};

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-stone-300 focus:ring-2 focus:ring-beige-400 focus:border-beige-400 outline-none transition-all bg-stone-50 text-stone-800 font-sans";

/// Birth data form.
///
/// Emits a complete [`UserInput`] through `on_submit` when the birth date and name are filled
/// in; any other submission is silently ignored. The form is only shown while idle, so it never
/// needs a pending state of its own.
#[component]
pub fn InputForm(on_submit: EventHandler<UserInput>) -> Element {
    let mut name = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let gender = use_signal(Gender::default);

    let submit = move |e: FormEvent| {
        e.prevent_default();

        if let Some(input) = UserInput::from_form(&date.read(), &time.read(), gender(), &name.read())
        {
            on_submit.call(input);
        }
    };

    rsx!(
        div { class: "w-full max-w-md mx-auto bg-white/80 backdrop-blur-sm p-8 rounded-xl shadow-lg border border-beige-200 fade-in",
            h2 { class: "text-2xl font-serif text-center mb-6 text-stone-700 tracking-widest",
                "情報の入力"
            }
            form { class: "space-y-6", onsubmit: submit,
                div {
                    label { class: "block text-sm font-medium text-stone-600 mb-1 font-sans",
                        "お名前（ニックネーム可）"
                    }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        placeholder: "例：山田 花子",
                        class: FIELD_CLASS,
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-stone-600 mb-1 font-sans",
                        "生年月日 "
                        span { class: "text-red-400 text-xs", "*必須" }
                    }
                    input {
                        r#type: "date",
                        required: true,
                        value: "{date}",
                        class: FIELD_CLASS,
                        oninput: move |e| date.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-stone-600 mb-1 font-sans",
                        "出生時刻 "
                        span { class: "text-stone-400 text-xs", "（不明な場合は空欄）" }
                    }
                    input {
                        r#type: "time",
                        value: "{time}",
                        class: FIELD_CLASS,
                        oninput: move |e| time.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-stone-600 mb-2 font-sans",
                        "性別"
                    }
                    div { class: "flex gap-4",
                        for option in Gender::ALL {
                            GenderOption { key: "{option.value()}", option, selected: gender }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "w-full bg-beige-500 hover:bg-beige-600 text-white font-serif font-bold py-4 rounded-lg shadow-md transition-all duration-300 hover:scale-[1.01] mt-4 tracking-widest text-lg",
                    "鑑定する"
                }
            }
        }
    )
}

#[component]
fn GenderOption(option: Gender, selected: Signal<Gender>) -> Element {
    let mut selected = selected;

    rsx!(
        label { class: "flex-1 cursor-pointer",
            input {
                r#type: "radio",
                name: "gender",
                value: option.value(),
                checked: selected() == option,
                class: "sr-only peer",
                onchange: move |_| selected.set(option),
            }
            div { class: "text-center py-3 rounded-lg border border-stone-300 peer-checked:bg-beige-100 peer-checked:border-beige-500 peer-checked:text-stone-800 text-stone-500 transition-all hover:bg-stone-100 font-sans",
                {option.label()}
            }
        }
    )
}
