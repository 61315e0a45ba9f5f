use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use banner::constants::{ASSET_FOLDER, DEFAULT_ANIMATION_DURATION, DEFAULT_STRIP_HEIGHT};
use banner::logging::{self, LogArgs};
use banner::manifest::load_manifest;
use banner::scan::banner_from_dir;
use banner::{
    AnimationKind, Banner, BannerConfig, SlideSelector, SortMode, StripPlan, WrapperHooks,
    component_class_names,
};

#[derive(Debug, Parser)]
#[command(name = "banner", about = "Select and lay out the slides of a banner")]
struct Cli {
    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Args)]
struct SelectionArgs {
    /// Seed for random sorting (reproducible output)
    #[arg(long)]
    seed: Option<u64>,

    /// Height slides are scaled to when planning the strip
    #[arg(long, default_value_t = DEFAULT_STRIP_HEIGHT)]
    strip_height: u32,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Select slides from a TOML banner manifest
    Select {
        manifest: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Build a banner from a directory of images and select its slides
    Scan {
        #[arg(default_value = ASSET_FOLDER)]
        dir: PathBuf,

        /// Sort mode: order or random
        #[arg(long, default_value = "order")]
        sort: String,

        /// Maximum number of slides, 0 for all
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        limit: i64,

        /// Animate the strip: scroll-left or scroll-right
        #[arg(long)]
        animate: Option<String>,

        /// Seconds per animation cycle
        #[arg(long, default_value_t = DEFAULT_ANIMATION_DURATION)]
        duration: u32,

        #[command(flatten)]
        selection: SelectionArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    match cli.command {
        Command::Select {
            manifest,
            selection,
        } => {
            let banner = load_manifest(&manifest)
                .with_context(|| format!("loading banner from {}", manifest.display()))?;
            report(&banner, &selection);
        }
        Command::Scan {
            dir,
            sort,
            limit,
            animate,
            duration,
            selection,
        } => {
            let mut options = BannerConfig::default()
                .with_sort(SortMode::parse(&sort))
                .with_limit(limit);
            options.normalize();
            if let Some(kind) = animate {
                options = options.with_animation(AnimationKind::parse(&kind), duration);
            }
            let banner = banner_from_dir(&dir, options)
                .with_context(|| format!("scanning images in {}", dir.display()))?;
            report(&banner, &selection);
        }
    }
    Ok(())
}

fn report(banner: &Banner, args: &SelectionArgs) {
    let mut selector = match args.seed {
        Some(seed) => SlideSelector::seeded(seed),
        None => SlideSelector::new(),
    };
    let hooks = WrapperHooks::new();

    // --- Wrapper ---
    println!("Banner: {} ({})", banner.title, banner.html_id());
    println!("Classes: {}", component_class_names(banner).join(" "));
    println!("Wrapper: {}", hooks.wrapper_attributes_html(banner));

    // --- Selection ---
    let selected = selector.select(banner);
    if selected.is_empty() {
        println!("No slides to show.");
        return;
    }
    info!(count = selected.len(), sort = %banner.options.sort_by, "selection ready");
    for (i, slide) in selected.iter().enumerate() {
        match &slide.image {
            Some(image) => println!("{:>3}. {} [{}]", i + 1, slide.title, image.display()),
            None => println!("{:>3}. {}", i + 1, slide.title),
        }
    }

    // --- Strip ---
    let plan = StripPlan::for_selection(banner, &selected, args.strip_height);
    if !plan.is_animated() {
        println!("Strip: {}px, static", plan.content_width);
        return;
    }
    let timing = match plan.cycle_seconds {
        Some(seconds) => format!("every {}s", seconds),
        None => "untimed".to_string(),
    };
    println!(
        "Strip: {}px, duplicated to {}px, {} {}",
        plan.content_width,
        plan.total_width(),
        plan.direction,
        timing
    );
}
