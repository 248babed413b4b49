use girder::cli;
use girder::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        // {:#} renders the full anyhow context chain on one line.
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
