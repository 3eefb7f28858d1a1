use super::{page_shell, use_currency_symbol};
use crate::format::format_currency;
use crate::icons::icon_credit_card;
use crate::ledger::{build_listing, ExpenseListing};
use crate::storage::ExpenseStore;
use yew::prelude::*;

#[function_component(ExpenseListPage)]
pub fn expense_list_page() -> Html {
    let currency_symbol = use_currency_symbol();
    let listing = use_state(ExpenseListing::default);

    {
        let listing = listing.clone();
        use_effect_with_deps(
            move |symbol: &String| {
                let records = ExpenseStore::browser().load();
                log::debug!("rendering {} stored expenses", records.len());
                listing.set(build_listing(&records, symbol));
                || ()
            },
            currency_symbol.clone(),
        );
    }

    html! {
        { page_shell(
            "Expenses",
            html! {},
            html! {
                <>
                    <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50 flex flex-col justify-center max-w-sm">
                        <div class="flex items-center gap-2 mb-1">
                            <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_credit_card() }</div>
                            <span class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{"Total Expenses"}</span>
                        </div>
                        <h3 id="totalExpense" class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_currency(listing.total, &currency_symbol) }</h3>
                        {
                            if listing.unparsed > 0 {
                                html! { <p class="text-xs text-amber-600 mt-1">{ format!("{} entries with an unreadable amount are not counted.", listing.unparsed) }</p> }
                            } else { html!{} }
                        }
                    </div>
                    <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
                        <div class="p-5 border-b border-border">
                            <h3 class="font-bold text-lg text-foreground">{"Expenses History"}</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table id="expenseTable" class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-8 py-4 font-bold">{"Date"}</th>
                                        <th class="px-8 py-4 font-bold">{"Title"}</th>
                                        <th class="px-8 py-4 font-bold">{"Category"}</th>
                                        <th class="px-8 py-4 font-bold">{"Amount"}</th>
                                        <th class="px-8 py-4 font-bold">{"Notes"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if listing.rows.is_empty() {
                                        html! { <tr><td colspan="5" class="px-8 py-6 text-center text-muted-foreground">{"No expenses yet."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for listing.rows.iter().enumerate().map(|(idx, row)| html! {
                                                    <tr key={idx} class="text-sm hover:bg-muted/40 transition-colors">
                                                        <td class="px-8 py-4 text-muted-foreground">{ row.date.clone() }</td>
                                                        <td class="px-8 py-4 text-foreground">{ row.title.clone() }</td>
                                                        <td class="px-8 py-4">
                                                            <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ row.category.clone() }</span>
                                                        </td>
                                                        <td class="px-8 py-4 font-semibold text-foreground">{ row.amount.clone() }</td>
                                                        <td class="px-8 py-4 text-muted-foreground">{ row.notes.clone() }</td>
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
