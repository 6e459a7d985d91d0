//! chargelog main entrypoint.

use chargelog::run;
use chargelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
