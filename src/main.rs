#![allow(non_snake_case)]

fn main() {
    dioxus::launch(portfolio::client::App);
}
