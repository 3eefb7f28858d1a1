use super::{page_shell, use_currency_symbol};
use crate::form::{submit_expense, ExpenseDraft, SubmitError, CATEGORIES};
use crate::icons::icon_credit_card;
use crate::ledger::ExpenseRow;
use crate::storage::ExpenseStore;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

const INPUT_CLASS: &str =
    "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none";

fn text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[function_component(AddExpensePage)]
pub fn add_expense_page() -> Html {
    let currency_symbol = use_currency_symbol();

    let form_title = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let form_date = use_state(|| "".to_string());
    let form_category = use_state(|| "".to_string());
    let form_notes = use_state(|| "".to_string());
    let form_error = use_state(|| None::<String>);
    let added = use_state(|| Vec::<ExpenseRow>::new());

    let reset_fields = {
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_date = form_date.clone();
        let form_category = form_category.clone();
        let form_notes = form_notes.clone();
        move || {
            form_title.set("".to_string());
            form_amount.set("".to_string());
            form_date.set("".to_string());
            form_category.set("".to_string());
            form_notes.set("".to_string());
        }
    };

    let on_submit = {
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_date = form_date.clone();
        let form_category = form_category.clone();
        let form_notes = form_notes.clone();
        let form_error = form_error.clone();
        let added = added.clone();
        let currency_symbol = currency_symbol.clone();
        let reset_fields = reset_fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = ExpenseDraft {
                title: (*form_title).clone(),
                amount: (*form_amount).clone(),
                date: (*form_date).clone(),
                category: (*form_category).clone(),
                notes: (*form_notes).clone(),
            };

            match submit_expense(&ExpenseStore::browser(), &draft) {
                Ok(record) => {
                    let mut next = (*added).clone();
                    next.push(ExpenseRow::from_record(&record, &currency_symbol));
                    added.set(next);
                    form_error.set(None);
                    reset_fields();
                }
                Err(SubmitError::Invalid(err)) => form_error.set(Some(err.to_string())),
                Err(SubmitError::Storage(err)) => {
                    log::error!("could not store expense: {}", err);
                    form_error.set(Some(format!("Could not save the expense. {}", err)));
                }
            }
        })
    };

    let on_clear = {
        let form_error = form_error.clone();
        Callback::from(move |_| {
            form_error.set(None);
            reset_fields();
        })
    };

    let on_category = {
        let form_category = form_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form_category.set(select.value());
        })
    };

    let on_notes = {
        let form_notes = form_notes.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form_notes.set(area.value());
        })
    };

    html! {
        { page_shell(
            "Add Expense",
            html! {},
            html! {
                <>
                    <form id="expenseForm" onsubmit={on_submit} class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                        <div class="flex items-center gap-2 mb-3">
                            <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_credit_card() }</div>
                            <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"New Expense"}</h4>
                        </div>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                            <div class="space-y-1">
                                <label for="title" class="text-[12px] font-bold text-muted-foreground">{"Title"}</label>
                                <input id="title" name="title" type="text" placeholder="What was it?" value={(*form_title).clone()} oninput={text_input(&form_title)} class={INPUT_CLASS} />
                            </div>
                            <div class="space-y-1">
                                <label for="amount" class="text-[12px] font-bold text-muted-foreground">{ format!("Amount ({})", currency_symbol) }</label>
                                <input id="amount" name="amount" type="number" step="0.01" placeholder={format!("{} 0.00", currency_symbol)} value={(*form_amount).clone()} oninput={text_input(&form_amount)} class={INPUT_CLASS} />
                            </div>
                            <div class="space-y-1">
                                <label for="date" class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                                <input id="date" name="date" type="date" value={(*form_date).clone()} oninput={text_input(&form_date)} class={INPUT_CLASS} />
                            </div>
                            <div class="space-y-1">
                                <label for="category" class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                                <select id="category" name="category" onchange={on_category} class={INPUT_CLASS}>
                                    <option value="" selected={form_category.is_empty()}>{"Choose a category"}</option>
                                    { for CATEGORIES.iter().map(|category| html! {
                                        <option value={*category} selected={*form_category == *category}>{ *category }</option>
                                    }) }
                                </select>
                            </div>
                        </div>
                        <div class="space-y-1 mb-4">
                            <label for="notes" class="text-[12px] font-bold text-muted-foreground">{"Notes"}</label>
                            <textarea id="notes" name="notes" rows="2" value={(*form_notes).clone()} oninput={on_notes} class={INPUT_CLASS}></textarea>
                        </div>
                        <div class="flex gap-3">
                            <button type="submit" class="flex-1 bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold">{"Add Expense"}</button>
                            <button type="button" onclick={on_clear} class="flex-1 bg-[#B2CBDE] text-[#173E63] py-2 rounded-[10px] text-[10px] font-bold">{"Reset"}</button>
                        </div>
                        {
                            if let Some(msg) = &*form_error {
                                html! { <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p> }
                            } else { html!{} }
                        }
                    </form>

                    <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
                        <div class="p-5 border-b border-border">
                            <h3 class="font-bold text-lg text-foreground">{"Added This Session"}</h3>
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
                                    { for added.iter().enumerate().map(|(idx, row)| html! {
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
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
