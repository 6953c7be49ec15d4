use std::process;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "cronexpand",
    version,
    about = "Expand a cron expression into the concrete values of each field"
)]
struct Cli {
    /// Cron expression: five fields followed by a command,
    /// e.g. "*/15 0 1,15 * 1-5 /usr/bin/find"
    expression: String,
}

fn main() {
    let cli = Cli::parse();

    match cron_expand::explain(&cli.expression) {
        Ok(table) => println!("{table}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
