use leptos::prelude::*;

use jobstats::app::App;
use jobstats::{config, logging};

fn main() {
    let config = config::default_config();
    logging::init(&config.logging);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
