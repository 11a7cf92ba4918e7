use loan_tracker_pwa::components::App;
use loan_tracker_pwa::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Loan Tracker starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
