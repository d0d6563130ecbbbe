//! Labelled inputs bound to one field of a form draft signal.
//!
//! Fields are addressed with plain `fn` accessors so the bindings stay `Copy`
//! and can be used from any view closure.

use leptos::prelude::*;

/// Text-like `<input>` (`text`, `number`, `datetime-local`, ...).
pub fn draft_input<D: Send + Sync + 'static>(
    draft: RwSignal<D>,
    label: &'static str,
    kind: &'static str,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                type=kind
                prop:value=move || draft.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| write(d, value));
                }
            />
        </label>
    }
}

/// `<textarea>` for longer descriptions.
pub fn draft_textarea<D: Send + Sync + 'static>(
    draft: RwSignal<D>,
    label: &'static str,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
) -> impl IntoView {
    view! {
        <label class="form__field form__field--wide">
            <span class="form__label">{label}</span>
            <textarea
                class="form__input"
                prop:value=move || draft.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| write(d, value));
                }
            ></textarea>
        </label>
    }
}

/// `<select>` over `(value, label)` pairs.
pub fn draft_select<D: Send + Sync + 'static>(
    draft: RwSignal<D>,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <select
                class="form__input"
                prop:value=move || draft.with(read)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| write(d, value));
                }
            >
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! {
                            <option value=value selected=move || draft.with(read) == value>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
