//! ReelKit - Short-form video assembly
//!
//! Headless entry point: ingests clips into the three libraries, builds a
//! timeline in the order given on the command line, and runs one merge.
//!
//! Usage: `reelkit hook=h.mp4 body=b.mp4 cta=c.mp4 [-o OUTPUT_DIR]`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use reelkit_core::Category;
use reelkit_media::{GenerationCoordinator, GenerationState};
use reelkit_timeline::{missing_categories, ClipLibrary, TimelineSequence};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("ReelKit starting...");
    reelkit_media::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: reelkit hook=FILE body=FILE cta=FILE ... [-o OUTPUT_DIR]");
        return Ok(());
    }

    let mut output_dir = PathBuf::from("reelkit-out");
    let mut inputs: Vec<(Category, PathBuf)> = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "-o" {
            output_dir = iter
                .next()
                .map(PathBuf::from)
                .context("-o requires a directory")?;
            continue;
        }
        let Some((category, path)) = arg.split_once('=') else {
            bail!("unrecognized argument {arg:?}, expected CATEGORY=FILE");
        };
        let Some(category) = Category::parse(category) else {
            bail!("unknown category {category:?}, expected hook, body, or cta");
        };
        inputs.push((category, PathBuf::from(path)));
    }

    let mut library = ClipLibrary::new();
    let mut timeline = TimelineSequence::new();
    let thumb_dir = output_dir.join("thumbs");

    for (category, path) in &inputs {
        let probed = reelkit_media::probe_clip_with_thumbnail(path, &thumb_dir)
            .with_context(|| format!("failed to ingest {}", path.display()))?;
        let clip = library.ingest(*category, probed)?;
        info!(
            category = %clip.category,
            name = %clip.name,
            duration = clip.duration,
            "ingested clip"
        );
        timeline.append(clip);
    }

    for category in Category::ALL {
        info!(
            "{} library: {} clip(s)",
            category,
            library.count(category)
        );
    }
    info!(
        "timeline: {} entries, {:.1}s total",
        timeline.len(),
        timeline.duration()
    );

    let missing = missing_categories(&timeline);
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|c| c.label()).collect();
        bail!(
            "timeline is not ready: add at least one clip of {}",
            labels.join(", ")
        );
    }

    let merger = Arc::new(reelkit_media::FfmpegMerger::new(&output_dir));
    let mut coordinator = GenerationCoordinator::new(merger);
    coordinator.request(&timeline)?;

    match coordinator.wait() {
        GenerationState::Succeeded(artifact) => {
            info!(artifact = %artifact, "merge complete");
            println!("{artifact}");
            Ok(())
        }
        GenerationState::Failed(reason) => bail!("merge failed: {reason}"),
        state => bail!("merge ended in unexpected state {state:?}"),
    }
}
