use clap::Parser;
use wasm_bindgen::prelude::*;

mod app;
mod assets;

/// Launch options parsed from the location hash, e.g. `#--seed=7&-v`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// Force a placement seed instead of a random one
    #[arg(short, long)]
    seed: Option<u64>,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args =
        Args::try_parse_from(location_hash.split(['#', '&'])).expect("could not parse launch options");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("error initializing logger");
    }

    let root = document()
        .get_element_by_id("game")
        .expect("could not find id=\"game\" element");

    log::debug!("app started, seed override: {:?}", args.seed);
    yew::Renderer::<app::App>::with_root_and_props(root, app::AppProps { seed: args.seed })
        .render();
}
