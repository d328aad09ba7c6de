//! attendo main entrypoint.

use attendo::run;
use attendo::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
