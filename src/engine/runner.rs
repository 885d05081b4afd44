use crate::{
    engine::state::State,
    models::entry::{CookieEntry, LogRecord},
};

use std::io;
use tokio::sync::mpsc;

/// Run the engine event loop to receive and count entries, returning the
/// most active cookie(s) once the channel closes. Printing is the caller's
/// job, so a failed read can never surface partial results.
pub async fn run(mut rx: mpsc::Receiver<CookieEntry>) -> Vec<String> {
    let mut state = State::new();

    // Process incoming entries
    while let Some(entry) = rx.recv().await {
        state.process_single_entry(entry);
    }

    // Channel closed, all entries counted
    state.most_active_cookies()
}

/// Set up engine task and return its handle along with the entry sender
pub fn setup_engine() -> (
    mpsc::Sender<CookieEntry>,
    tokio::task::JoinHandle<Vec<String>>,
) {
    let (entry_tx, entry_rx) = mpsc::channel(1000);

    let handle = tokio::spawn(async move { run(entry_rx).await });

    (entry_tx, handle)
}

/// Stream the log through the date filter and send surviving entries to the
/// engine. The first record is the header row and is dropped no matter what
/// it contains. Rows that do not parse are silently skipped; an I/O failure
/// of the underlying reader aborts the stream and propagates.
pub async fn send_entries_to_engine<R: io::Read>(
    csv_reader: &mut csv::Reader<R>,
    target_date: &str,
    entry_tx: mpsc::Sender<CookieEntry>,
) -> Result<(), csv::Error> {
    let mut records = csv_reader.records();
    let mut record_count: usize = 0;

    if let Some(Err(err)) = records.next() {
        if err.is_io_error() {
            return Err(err);
        }
    }

    for result in records {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err),
            Err(_) => continue,
        };

        let Some(row) = LogRecord::from_record(&record) else {
            continue;
        };
        let Some(entry) = row.entry_for_date(target_date) else {
            continue;
        };

        if entry_tx.send(entry).await.is_err() {
            break;
        }

        record_count += 1;

        if record_count % 1000 == 0 {
            tokio::task::yield_now().await;
        }
    }

    // Close the channel to signal the engine no more entries will arrive
    drop(entry_tx);

    Ok(())
}

/// Wait for engine task to finish counting and hand back its result
pub async fn finalize_engine(handle: tokio::task::JoinHandle<Vec<String>>) -> Vec<String> {
    match handle.await {
        Ok(cookies) => cookies,
        Err(e) => {
            eprintln!("Engine task error: {:?}", e);
            std::process::exit(1);
        }
    }
}
