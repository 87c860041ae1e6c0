//! CLI smoke entry point.
//!
//! # Responsibility
//! - Seed a book list, bind it to a headless surface and drive a scripted
//!   set of edit sessions through it.
//! - Print every surface call so list and surface wiring can be checked by eye.
//!
//! Usage: `booklist_cli [seed.json]`; log level from `BOOKLIST_LOG`.

use booklist_core::{
    default_log_level, init_logging, load_seed_json, Book, BookDraft, BookListScreen,
    DispatchQueue, LogConfig, RecordingSurface,
};
use log::error;
use std::error::Error;
use std::process::ExitCode;
use std::rc::Rc;

fn main() -> ExitCode {
    let level = std::env::var("BOOKLIST_LOG").unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&LogConfig::stderr(level)) {
        eprintln!("logging disabled: {err}");
    }

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error=\"{err}\"");
            eprintln!("booklist_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(seed_path: Option<String>) -> Result<(), Box<dyn Error>> {
    let seed = match seed_path {
        Some(path) => load_seed_json(&std::fs::read_to_string(path)?)?,
        None => Book::demos(),
    };
    println!("booklist_core version={}", booklist_core::core_version());

    let screen = BookListScreen::new(seed, DispatchQueue::new());
    let surface = Rc::new(RecordingSurface::new());
    let adapter = screen.attach_surface(&surface);
    surface.set_data_source(adapter.data_source());
    print_books("seed", &screen);

    let session = screen.begin_create();
    let rejected = match session.save(&BookDraft::new("Frank Herbert", "Dune", "MCMLXV")) {
        Ok(()) => return Err("roman year was accepted".into()),
        Err(rejection) => rejection,
    };
    println!("create rejected: {}", rejected.reason);
    rejected
        .session
        .save(&BookDraft::new("Frank Herbert", "Dune", "1965"))?;
    flush("create", &screen, &surface);

    let session = screen.begin_edit(0)?;
    let mut draft = session.draft();
    draft.title = Some(format!("{} (2nd ed.)", session.book().title));
    session.save(&draft)?;
    flush("save row 0", &screen, &surface);

    screen.begin_edit(1)?.delete()?;
    flush("delete row 1", &screen, &surface);

    screen.begin_create().cancel();
    flush("cancel", &screen, &surface);

    if let Some(err) = screen.take_last_error() {
        return Err(err.into());
    }
    println!(
        "visible_rows={} mismatches={}",
        surface.visible_rows(),
        surface.mismatches()
    );
    print_books("final", &screen);
    Ok(())
}

fn flush(step: &str, screen: &BookListScreen, surface: &RecordingSurface) {
    let ran = screen.queue().run_pending();
    let calls = surface
        .take_calls()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    println!("{step}: tasks={ran} calls=[{}]", calls.join(", "));
}

fn print_books(label: &str, screen: &BookListScreen) {
    println!("{label}:");
    for (row, book) in screen.snapshot().iter().enumerate() {
        println!(
            "  {row}: {} / {} / {}",
            book.title, book.author, book.year_of_publishing
        );
    }
}
