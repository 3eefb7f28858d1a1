use crate::settings::AppSettings;
use yew::prelude::*;

mod add_expense;
mod analysis;
mod expense_list;
mod layout;
mod settings;
mod summary;

pub use add_expense::AddExpensePage;
pub use analysis::AnalysisPage;
pub use expense_list::ExpenseListPage;
pub use layout::Layout;
pub use settings::SettingsPage;
pub use summary::SummaryPage;

#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    AddExpense,
    Expenses,
    Summary,
    Analysis,
    Settings,
}

fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[hook]
fn use_currency_symbol() -> String {
    use_context::<UseStateHandle<AppSettings>>()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| AppSettings::default().currency_symbol)
}
