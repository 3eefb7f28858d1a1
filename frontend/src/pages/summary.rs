use super::{page_shell, use_currency_symbol};
use crate::analysis::TimePeriod;
use crate::format::format_currency;
use crate::storage::ExpenseStore;
use crate::summary::summarize;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(SummaryPage)]
pub fn summary_page() -> Html {
    let currency_symbol = use_currency_symbol();
    let period = use_state(TimePeriod::default);
    let records = use_state(|| ExpenseStore::browser().load());

    let summary = summarize(&records, *period);

    let on_period_change = {
        let period = period.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            period.set(TimePeriod::parse(&select.value()));
        })
    };

    let per_day = *period == TimePeriod::Day;

    html! {
        { page_shell(
            "Total Expenses",
            html! {
                <select onchange={on_period_change} class="px-4 py-2 bg-input border border-input rounded-lg text-foreground">
                    { for TimePeriod::ALL.iter().map(|p| html! {
                        <option value={p.as_str()} selected={*p == *period}>{ p.label() }</option>
                    }) }
                </select>
            },
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <div class="bg-card rounded-lg p-6 border border-border">
                            <p class="text-sm text-muted-foreground mb-2">{"Total Expenses"}</p>
                            <h3 class="text-3xl font-bold text-foreground">{ format_currency(summary.total, &currency_symbol) }</h3>
                            {
                                if summary.skipped > 0 {
                                    html! { <p class="text-xs text-amber-600 mt-1">{ format!("{} entries skipped (unreadable date or amount).", summary.skipped) }</p> }
                                } else { html!{} }
                            }
                        </div>
                    </div>

                    <div class="bg-card rounded-lg border border-border overflow-hidden">
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead class="bg-secondary border-b border-border">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-sm font-semibold text-secondary-foreground">{ if per_day { "Date" } else { "Period" } }</th>
                                        <th class="px-6 py-3 text-left text-sm font-semibold text-secondary-foreground">{"Category"}</th>
                                        { if per_day { html! { <th class="px-6 py-3 text-left text-sm font-semibold text-secondary-foreground">{"Title"}</th> } } else { html! {} } }
                                        <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Amount"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if summary.lines.is_empty() {
                                        html! { <tr><td colspan="4" class="px-6 py-6 text-center text-muted-foreground">{"No expenses yet."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for summary.lines.iter().map(|line| html! {
                                                    <tr class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-6 py-3 text-muted-foreground">{ line.group.clone() }</td>
                                                        <td class="px-6 py-3 text-foreground">{ line.category.clone() }</td>
                                                        { if per_day { html! { <td class="px-6 py-3 text-foreground">{ line.title.clone().unwrap_or_default() }</td> } } else { html! {} } }
                                                        <td class="px-6 py-3 text-right font-semibold text-foreground">{ format_currency(line.amount, &currency_symbol) }</td>
                                                    </tr>
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
