//! rSetlogger main entrypoint.

use rsetlogger::run;
use rsetlogger::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
