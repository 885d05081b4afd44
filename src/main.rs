mod adapters;
mod engine;

mod models;

use engine::runner;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let arguments = match adapters::cli::parse_arguments(&args) {
        Ok(arguments) => arguments,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let mut csv_reader = match adapters::csv_parser::build_csv_reader(&arguments.file_path) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("Failed to open input file: {}", err);
            std::process::exit(1);
        }
    };

    let (entry_tx, engine_handle) = runner::setup_engine();

    if let Err(err) =
        runner::send_entries_to_engine(&mut csv_reader, &arguments.date, entry_tx).await
    {
        // The engine never prints, so no result lines accompany the error
        eprintln!("Failed to read input file: {}", err);
        std::process::exit(1);
    }

    let most_active = runner::finalize_engine(engine_handle).await;
    adapters::output::output_cookies(&most_active, std::io::stdout());
}
