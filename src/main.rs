//! rPayroll main entrypoint.

use rpayroll::run;
use rpayroll::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
