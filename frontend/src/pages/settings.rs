use super::page_shell;
use crate::settings::{save_settings, AppSettings, CURRENCY_CHOICES};
use crate::storage::BrowserStorage;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let save_error = use_state(|| None::<String>);

    let current_currency = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| AppSettings::default().currency_code);

    let on_currency_change = {
        let settings = settings.clone();
        let save_error = save_error.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let input: HtmlSelectElement = e.target_unchecked_into();
                let next = AppSettings::for_currency(&input.value());
                match save_settings(&BrowserStorage, &next) {
                    Ok(()) => save_error.set(None),
                    Err(err) => {
                        log::warn!("could not persist settings: {}", err);
                        save_error.set(Some(format!("Saved for this visit only. {}", err)));
                    }
                }
                settings.set(next);
            }
        })
    };

    html! {
        { page_shell(
            "Settings",
            html! {},
            html! {
                <div class="bg-card rounded-lg p-6 border border-border max-w-lg">
                    <h2 class="text-xl font-bold text-foreground mb-6">{"Preferences"}</h2>
                    <div class="space-y-4">
                        <div>
                            <label class="block text-sm font-medium text-foreground mb-2">{"Currency"}</label>
                            <select onchange={on_currency_change} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary">
                                { for CURRENCY_CHOICES.iter().map(|(code, label)| html! {
                                    <option value={*code} selected={current_currency == *code}>{ *label }</option>
                                }) }
                            </select>
                            <p class="text-xs text-muted-foreground mt-2">{"Currency updates are applied across the expense tables and charts."}</p>
                            {
                                if let Some(msg) = &*save_error {
                                    html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                                } else { html!{} }
                            }
                        </div>
                    </div>
                </div>
            }
        ) }
    }
}
