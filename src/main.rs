//! Command-line driver for the tilescape layout and transition engine.

use std::path::PathBuf;

use tilescape::{
    engine::{Frame, TileSession},
    error::TilescapeError,
    layout::Layout,
    options::Options,
    source::{load_records, FetchError, JsonFileSource, Record, StaticToken},
    util::frame_timing::FrameTiming,
};

/// Environment variable holding the spreadsheet access token.
#[cfg(feature = "sheets")]
const TOKEN_VAR: &str = "TILESCAPE_TOKEN";

const USAGE: &str = "Usage: tilescape <records.json> [--header] \
                     [--options <file.toml>] | --sheet <spreadsheet id>";

#[derive(Debug, Default)]
struct Args {
    records: Option<PathBuf>,
    sheet: Option<String>,
    options: Option<PathBuf>,
    skip_header: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--header" => args.skip_header = true,
            "--sheet" => {
                args.sheet = Some(iter.next().ok_or("--sheet needs an id")?);
            }
            "--options" => {
                let path = iter.next().ok_or("--options needs a path")?;
                args.options = Some(PathBuf::from(path));
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown flag {arg}"));
            }
            _ => args.records = Some(PathBuf::from(arg)),
        }
    }
    if args.records.is_none() && args.sheet.is_none() {
        return Err(USAGE.to_owned());
    }
    Ok(args)
}

fn fetch(args: &Args) -> Result<Vec<Record>, TilescapeError> {
    if let Some(id) = &args.sheet {
        return fetch_sheet(id);
    }
    let Some(path) = &args.records else {
        return Err(FetchError::Empty.into());
    };
    let mut source = JsonFileSource::new(path);
    if args.skip_header {
        source = source.skipping_header();
    }
    load_records(&mut StaticToken::anonymous(), &source)
}

#[cfg(feature = "sheets")]
fn fetch_sheet(id: &str) -> Result<Vec<Record>, TilescapeError> {
    let source = tilescape::source::SheetsSource::new(id);
    load_records(&mut StaticToken::from_env(TOKEN_VAR), &source)
}

#[cfg(not(feature = "sheets"))]
fn fetch_sheet(_id: &str) -> Result<Vec<Record>, TilescapeError> {
    let reason = "built without the `sheets` feature".to_owned();
    Err(FetchError::Http(reason).into())
}

/// Run one transition to completion at a fixed tick rate.
fn play(session: &mut TileSession, timing: &mut FrameTiming, layout: Layout) {
    if let Err(e) = session.select(layout) {
        log::error!("{e}");
        return;
    }

    let mut renders = 0_usize;
    let mut instances = 0_usize;
    let mut hook = |frame: &Frame<'_>| {
        renders += 1;
        instances = frame.instances().len();
    };

    while session.is_animating() {
        std::thread::sleep(timing.until_next_frame());
        let dt = timing.tick();
        let outcome = session.update(dt, &mut hook);
        if outcome.finished {
            break;
        }
    }
    log::info!(
        "{layout}: {renders} renders of {instances} tiles at ~{:.0} fps",
        timing.fps()
    );
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let options = match &args.options {
        Some(path) => match Options::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let records = match fetch(&args) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut session = TileSession::new(&records, options);
    let _ = session.resize(1920, 1080);
    let mut timing = FrameTiming::new(60);

    // The session starts moving toward its initial layout on creation.
    let mut noop = |_: &Frame<'_>| {};
    while session.is_animating() {
        std::thread::sleep(timing.until_next_frame());
        let _ = session.update(timing.tick(), &mut noop);
    }

    for layout in Layout::ALL {
        play(&mut session, &mut timing, layout);
    }
}
