mod cli_commands;
mod cli_exec;
mod cli_runtime;

use self::cli_commands::Commands;

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
