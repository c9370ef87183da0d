//! Form controls bound to the shared [`FormState`] signal.

use chrono::{DateTime, Utc};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::error::FormResult;
use crate::form::{FormEdit, FormState};
use crate::timezones::{from_local_input, parse_timezone, timezone_options, to_local_input};
use crate::types::{Frequency, TimezoneOption, TransportMode};

/// Which end of the sampling window a [`DateTimeField`] edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowBound {
    Start,
    End,
}

fn edit(set_form: WriteSignal<FormState>, change: FormEdit) {
    set_form.update(|form| *form = form.apply(change));
}

#[component]
pub fn TimezoneSelect(
    form: ReadSignal<FormState>,
    set_form: WriteSignal<FormState>,
) -> impl IntoView {
    // Built on mount and rebuilt on focus so offsets match the moment the
    // list is opened.
    let (options, set_options) = create_signal(timezone_options(Utc::now()));

    let on_focus = move |_| set_options.set(timezone_options(Utc::now()));

    let on_change = move |ev: Event| match parse_timezone(&event_target_value(&ev)) {
        Ok(tz) => edit(set_form, FormEdit::Timezone(tz)),
        Err(e) => log::warn!("⚠️ {}", e),
    };

    view! {
        <label class="field">
            <span class="field-label">"TimeZone"</span>
            <select required=true on:focus=on_focus on:change=on_change>
                <For
                    each=move || options.get()
                    key=|option| option.label.clone()
                    children=move |option: TimezoneOption| {
                        let value = option.value.clone();
                        view! {
                            <option
                                value=option.value
                                prop:selected=move || form.with(|f| f.timezone.name() == value)
                            >
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}

fn window_instant(form: &FormState, bound: WindowBound) -> DateTime<Utc> {
    match bound {
        WindowBound::Start => form.start,
        WindowBound::End => form.end,
    }
}

/// Apply a raw `datetime-local` value to one end of the window.
///
/// Returns the next state and the text the input should show. Unparseable
/// input, including a cleared field, leaves the state untouched.
pub fn apply_window_input(form: &FormState, bound: WindowBound, raw: &str) -> FormResult<(FormState, String)> {
    let instant = from_local_input(raw)?;
    let change = match bound {
        WindowBound::Start => FormEdit::Start(instant),
        WindowBound::End => FormEdit::End(instant),
    };
    Ok((form.apply(change), to_local_input(instant)))
}

/// `datetime-local` input editing the UTC wall-clock fields sent as-is.
#[component]
pub fn DateTimeField(
    label: &'static str,
    bound: WindowBound,
    form: ReadSignal<FormState>,
    set_form: WriteSignal<FormState>,
) -> impl IntoView {
    let value = move || form.with(|f| to_local_input(window_instant(f, bound)));

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let current = form.get_untracked();
        match apply_window_input(&current, bound, &input.value()) {
            Ok((next, _)) => set_form.set(next),
            Err(e) => {
                log::warn!("⚠️ Ignoring {} edit: {}", label, e);
                input.set_value(&to_local_input(window_instant(&current, bound)));
            }
        }
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input type="datetime-local" prop:value=value on:change=on_change/>
        </label>
    }
}

#[component]
pub fn FrequencySelect(
    form: ReadSignal<FormState>,
    set_form: WriteSignal<FormState>,
) -> impl IntoView {
    let on_change = move |ev: Event| {
        let frequency = Frequency::from_option_value(&event_target_value(&ev));
        edit(set_form, FormEdit::Frequency(frequency));
    };

    view! {
        <label class="field">
            <span class="field-label">"Frequency"</span>
            <select required=true on:change=on_change>
                <option value="" disabled=true prop:selected=move || form.with(|f| f.frequency.is_none())>
                    "Select a frequency"
                </option>
                {Frequency::ALL
                    .into_iter()
                    .map(|frequency| view! {
                        <option
                            value=frequency.option_value()
                            prop:selected=move || form.with(|f| f.frequency == Some(frequency))
                        >
                            {frequency.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn TransportModeSelect(
    form: ReadSignal<FormState>,
    set_form: WriteSignal<FormState>,
) -> impl IntoView {
    let on_change = move |ev: Event| {
        let mode = TransportMode::from_option_value(&event_target_value(&ev));
        edit(set_form, FormEdit::TransportMode(mode));
    };

    view! {
        <label class="field">
            <span class="field-label">"Transport mode"</span>
            <select required=true on:change=on_change>
                <option value="" disabled=true prop:selected=move || form.with(|f| f.transport_mode.is_none())>
                    "Select a mode"
                </option>
                {TransportMode::ALL
                    .into_iter()
                    .map(|mode| view! {
                        <option
                            value=mode.wire_value()
                            prop:selected=move || form.with(|f| f.transport_mode == Some(mode))
                        >
                            {mode.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    fn form() -> FormState {
        FormState::new(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap())
            .apply(FormEdit::Timezone(Tz::Asia__Kolkata))
    }

    #[test]
    fn test_window_input_sets_bound() {
        let (next, shown) = apply_window_input(&form(), WindowBound::End, "2024-05-01T10:00").unwrap();
        assert_eq!(next.end, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
        assert_eq!(next.start, form().start);
        assert_eq!(shown, "2024-05-01T10:00");
    }

    #[test]
    fn test_cleared_window_input_keeps_previous_instant() {
        let err = apply_window_input(&form(), WindowBound::Start, "").unwrap_err();
        assert_eq!(err, FormError::InvalidDateTime(String::new()));
        assert_eq!(to_local_input(window_instant(&form(), WindowBound::Start)), "2024-05-01T08:00");
    }
}
