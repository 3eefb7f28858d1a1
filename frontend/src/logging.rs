use std::sync::Once;

static INIT: Once = Once::new();

fn level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

pub fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(level()));
        log::info!("logging initialized at level `{}`", level());
    });
}
