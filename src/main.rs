// SPDX-License-Identifier: MPL-2.0
//! Headless walkthrough of the kaomoji page.
//!
//! Plays a short scripted visit (load, copy, shortcut, form submissions,
//! scroll) against an in-memory page and prints every change of the toast
//! markup and of the document title.

use kaomoji_page::config::{self, Config};
use kaomoji_page::error::{Error, Result};
use kaomoji_page::i18n::fluent::I18n;
use kaomoji_page::interactions::{ContactForm, KeyPress, MemoryClipboard, Section};
use kaomoji_page::notifications::{Inbox, MemorySurface};
use kaomoji_page::page::{Effect, Event, Message, Page};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing_subscriber::EnvFilter;

type DemoPage = Page<MemorySurface, MemoryClipboard>;

struct Args {
    lang: Option<String>,
    config: Option<PathBuf>,
    verbose: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        verbose: args.contains(["-v", "--verbose"]),
        lang: args
            .opt_value_from_str("--lang")
            .map_err(|e| Error::Config(e.to_string()))?,
        config: args
            .opt_value_from_str("--config")
            .map_err(|e| Error::Config(e.to_string()))?,
    };
    for extra in args.finish() {
        eprintln!("Ignoring unexpected argument: {}", extra.to_string_lossy());
    }
    Ok(parsed)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args()?;
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not read settings");
            Config::default()
        }),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(run(args.lang, &config));
    Ok(())
}

fn script() -> Vec<(u64, Event)> {
    vec![
        (0, Event::Load { viewport_height: 800.0 }),
        (500, Event::CopyKaomoji("(◕‿◕)".to_string())),
        (1_500, Event::KeyDown(KeyPress::plain("k"))),
        (1_000, Event::SubmitForm(ContactForm::default())),
        (
            1_000,
            Event::SubmitForm(ContactForm::new("Aki", "aki@example.jp", "(＾▽＾)")),
        ),
        (
            300,
            Event::Scroll {
                offset: 900.0,
                viewport_height: 800.0,
            },
        ),
        (
            200,
            Event::FollowLink {
                section_top: 2_000.0,
                header_height: 70.0,
            },
        ),
    ]
}

async fn run(lang: Option<String>, config: &Config) {
    let timings = config.timings();
    let i18n = I18n::new(lang, config);
    let (page, mut inbox) = Page::new(
        MemorySurface::new(timings.transition()),
        MemoryClipboard::new(),
        i18n,
        timings,
    );
    let mut page = page.with_sections(vec![
        Section::new("home", 0.0, 700.0),
        Section::new("gallery", 700.0, 900.0),
        Section::new("contact", 1_900.0, 600.0),
    ]);
    let mut last = String::new();

    for (delay_ms, event) in script() {
        wait(&mut page, &mut inbox, Duration::from_millis(delay_ms), &mut last).await;
        println!("> {event:?}");
        if let Effect::ScrollTo(offset) = page.handle(event) {
            println!("  scroll to {offset}px");
        }
        report(&page, &mut last);
    }

    while page.notifications().current().is_some() {
        let Some(message) = inbox.recv().await else {
            break;
        };
        page.handle_message(message);
        report(&page, &mut last);
    }
}

async fn wait(page: &mut DemoPage, inbox: &mut Inbox<Message>, delay: Duration, last: &mut String) {
    let deadline = Instant::now() + delay;
    loop {
        tokio::select! {
            () = time::sleep_until(deadline) => return,
            Some(message) = inbox.recv() => {
                page.handle_message(message);
                report(page, last);
            }
        }
    }
}

fn report(page: &DemoPage, last: &mut String) {
    let toast = page
        .notifications()
        .surface()
        .nodes()
        .first()
        .map_or_else(|| "(no toast)".to_string(), |node| node.html.clone());
    let snapshot = format!("  title: {}\n  toast: {toast}", page.title());
    if snapshot != *last {
        println!("{snapshot}");
        *last = snapshot;
    }
}
