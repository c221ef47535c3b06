use dioxus::desktop::Config;
use dioxus::desktop::LogicalSize;
use dioxus::desktop::WindowBuilder;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    // Phone-sized window so the layout matches what mobile users see.
    let window = WindowBuilder::new()
        .with_title("Banque Misr")
        .with_inner_size(LogicalSize::new(412.0, 915.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
