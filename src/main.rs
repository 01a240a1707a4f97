mod configurator;
mod demo;
mod model;
mod popup;
mod resolve;
mod selection;
mod title;
mod widget;

use dioxus::prelude::*;

use demo::{Demo, DualDemo};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Demo {},
    #[route("/dual")]
    DualDemo {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
