//! Concurrent downloads drawn as an aligned progress grid.
//!
//! Each download runs as its own tokio task and reports byte counts over a
//! channel. The render loop owns the tracker state: it folds updates into
//! one [`ProgressState`] per package, then redraws every tick.

use std::time::{Duration, Instant};

use owo_colors::OwoColorize;
use progress_layout::*;
use tokio::sync::mpsc;
use tokio::time;

struct Update {
    index: usize,
    done: u64,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let definition = ProgressLayoutBuilder::new()
        .spinner(Spinner::dots())
        .text_with(|s: &ProgressState<&'static Package>| match s.is_finished() {
            true => s.context.name.green().to_string(),
            false => s.context.name.bold().to_string(),
        })
        .progress_bar()
        .percentage()
        .completed("B")
        .speed("B")
        .elapsed()
        .build();

    let (tx, mut rx) = mpsc::unbounded_channel();
    for (index, pkg) in PACKAGES.iter().enumerate() {
        tokio::spawn(download(index, pkg, tx.clone()));
    }
    drop(tx);

    let started = Instant::now();
    let mut states: Vec<_> = PACKAGES
        .iter()
        .map(|p| ProgressState::new(p).total(p.size).status(Status::Running))
        .collect();
    let mut renderer = ProgressRenderer::new().width(100);
    let mut interval = time::interval(Duration::from_millis(80));
    let mut frame = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                frame += 1;
                for state in states.iter_mut().filter(|s| !s.is_finished()) {
                    state.frame = frame;
                    state.elapsed = started.elapsed();
                    state.speed = Some(state.completed as f64 / state.elapsed.as_secs_f64().max(0.001));
                }
                renderer.render(&mut std::io::stdout(), &definition, &states)?;
            }
            update = rx.recv() => {
                let Some(Update { index, done }) = update else { break };
                let state = &mut states[index];
                state.completed = done;
                if Some(done) == state.total {
                    state.status = Status::Finished;
                }
            }
        }
    }

    renderer.render(&mut std::io::stdout(), &definition, &states)?;
    renderer.finish();

    let total: u64 = PACKAGES.iter().map(|p| p.size).sum();
    tracing::info!(packages = PACKAGES.len(), bytes = total, "downloads complete");
    Ok(())
}

async fn download(index: usize, pkg: &'static Package, tx: mpsc::UnboundedSender<Update>) {
    let chunks = 16;
    for i in 1..=chunks {
        time::sleep(Duration::from_millis(60 + pkg.size / 20_000)).await;
        let done = pkg.size * i / chunks;
        if tx.send(Update { index, done }).is_err() {
            return;
        }
    }
}

// -- Mock package data -------------------------------------------------------

struct Package {
    name: &'static str,
    size: u64,
}

const PACKAGES: &[Package] = &[
    Package {
        name: "serde",
        size: 320_000,
    },
    Package {
        name: "serde_derive",
        size: 180_000,
    },
    Package {
        name: "tokio",
        size: 890_000,
    },
    Package {
        name: "syn",
        size: 1_240_000,
    },
    Package {
        name: "quote",
        size: 85_000,
    },
    Package {
        name: "proc-macro2",
        size: 120_000,
    },
];
