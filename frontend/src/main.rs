mod analysis;
mod api;
mod charts;
mod errors;
mod form;
mod format;
mod icons;
mod ledger;
mod logging;
mod models;
mod pages;
mod settings;
mod storage;
mod summary;

use pages::{
    AddExpensePage, AnalysisPage, ExpenseListPage, Layout, Page, SettingsPage, SummaryPage,
};
use settings::{load_settings, AppSettings};
use storage::BrowserStorage;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::AddExpense);
    let settings = use_state(|| load_settings(&BrowserStorage));
    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::AddExpense => html! { <AddExpensePage /> },
        Page::Expenses => html! { <ExpenseListPage /> },
        Page::Summary => html! { <SummaryPage /> },
        Page::Analysis => html! { <AnalysisPage /> },
        Page::Settings => html! { <SettingsPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <Layout active_page={*active_page} on_select={on_select}>
                { content }
            </Layout>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}

fn main() {
    logging::init_logging();
    yew::Renderer::<App>::new().render();
}
