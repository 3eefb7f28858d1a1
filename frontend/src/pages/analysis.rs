use super::{page_shell, use_currency_symbol};
use crate::analysis::{
    AnalysisController, AnalysisPayload, FetchState, Outcome, RequestToken, TimePeriod,
};
use crate::api::fetch_analysis;
use crate::charts::chart_js::{self, Chart};
use crate::charts::{ChartKind, ChartSet};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(AnalysisPage)]
pub fn analysis_page() -> Html {
    let currency_symbol = use_currency_symbol();
    let controller = use_mut_ref(AnalysisController::new);
    let charts = use_mut_ref(ChartSet::<Chart>::new);

    let period = use_state(TimePeriod::default);
    let refresh = use_state(|| 0u32);
    let fetch_state = use_state(|| FetchState::Idle);
    let notice = use_state(|| None::<String>);
    // tagged with its request so an identical refresh still triggers a redraw
    let payload = use_state(|| None::<(RequestToken, Rc<AnalysisPayload>)>);

    // fetch whenever the period changes or a refresh is requested
    {
        let controller = controller.clone();
        let fetch_state = fetch_state.clone();
        let notice = notice.clone();
        let payload = payload.clone();
        use_effect_with_deps(
            move |(period, _): &(TimePeriod, u32)| {
                let period = *period;
                let token = controller.borrow_mut().begin(period);
                fetch_state.set(FetchState::Loading);

                spawn_local(async move {
                    let result = fetch_analysis(period).await;
                    let outcome = controller.borrow_mut().resolve(token, result);
                    match outcome {
                        Outcome::Render(data) => {
                            notice.set(None);
                            payload.set(Some((token, Rc::new(data))));
                        }
                        Outcome::Failed(message) => notice.set(Some(message)),
                        Outcome::Stale => return,
                    }
                    fetch_state.set(controller.borrow().state());
                });
                || ()
            },
            (*period, *refresh),
        );
    }

    // redraw all four charts from the latest applied payload
    {
        let charts = charts.clone();
        let notice = notice.clone();
        use_effect_with_deps(
            move |(payload, symbol): &(Option<(RequestToken, Rc<AnalysisPayload>)>, String)| {
                if let Some((_, payload)) = payload {
                    let result = charts
                        .borrow_mut()
                        .replace_all(|kind| chart_js::create(kind, payload, symbol));
                    match result {
                        Ok(()) => log::debug!("drew {} charts", charts.borrow().len()),
                        Err(err) => {
                            log::error!("could not draw charts: {}", err);
                            notice.set(Some(format!("Could not draw charts. {}", err)));
                        }
                    }
                }
                || ()
            },
            ((*payload).clone(), currency_symbol.clone()),
        );
    }

    {
        let charts = charts.clone();
        use_effect_with_deps(
            move |_| {
                move || charts.borrow_mut().clear()
            },
            (),
        );
    }

    let on_period_change = {
        let period = period.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            period.set(TimePeriod::parse(&select.value()));
        })
    };

    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.set(refresh.wrapping_add(1)))
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let loading = *fetch_state == FetchState::Loading;

    html! {
        { page_shell(
            "Expense Analysis",
            html! {
                <div class="flex items-center gap-3">
                    { if loading { html! { <span class="text-xs text-muted-foreground">{"Loading..."}</span> } } else { html! {} } }
                    <select id="time-period" onchange={on_period_change} class="px-4 py-2 bg-input border border-input rounded-lg text-foreground">
                        { for TimePeriod::ALL.iter().map(|p| html! {
                            <option value={p.as_str()} selected={*p == *period}>{ p.label() }</option>
                        }) }
                    </select>
                    <button type="button" onclick={on_refresh} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-[11px] font-bold">{"Refresh"}</button>
                </div>
            },
            html! {
                <>
                    {
                        if let Some(msg) = &*notice {
                            html! {
                                <div role="alert" class="flex items-center justify-between bg-red-50 border border-red-200 text-red-700 rounded-lg px-4 py-3 text-sm">
                                    <span>{ msg.clone() }</span>
                                    <button type="button" onclick={on_dismiss} class="font-bold">{"Dismiss"}</button>
                                </div>
                            }
                        } else { html!{} }
                    }
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        { for ChartKind::ALL.iter().map(|kind| html! {
                            <div class="bg-card rounded-lg p-6 border border-border">
                                <h3 class="text-sm font-bold text-foreground mb-4">{ kind.title() }</h3>
                                <canvas id={kind.canvas_id()}></canvas>
                            </div>
                        }) }
                    </div>
                </>
            }
        ) }
    }
}
