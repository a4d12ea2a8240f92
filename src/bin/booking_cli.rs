use std::process;

use booking_core::cli::run_wizard;
use booking_core::config::AppConfig;
use booking_core::init;

fn main() {
    init();

    let config = AppConfig::from_env();
    if let Err(err) = run_wizard(&config) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
