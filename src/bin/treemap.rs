use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use movie_treemap::api::{self, DEFAULT_DATA_URL};
use movie_treemap::models::DatasetNode;
use movie_treemap::page::PageConfig;
use movie_treemap::server::{self, ServerConfig};
use movie_treemap::viz::{self, Point, PointerEvent, RenderConfig};
use movie_treemap::{Client, Hierarchy, stats, storage};
use num_format::{Locale, ToFormattedString};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "treemap",
    version,
    about = "Render movie revenue data as a treemap and serve the page"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the dataset and render it (.html page, .svg, or .png preview).
    Render(RenderArgs),
    /// Serve a directory over HTTP.
    Serve(ServeArgs),
    /// Fetch the dataset and save it (.json) or its laid-out tiles (.csv).
    Fetch(FetchArgs),
    /// Print per-genre statistics.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Dataset URL.
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    url: String,
    /// Read the dataset from a local JSON file instead of fetching it.
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Canvas width (default 1000).
    #[arg(long, default_value_t = viz::types::DEFAULT_WIDTH)]
    width: u32,
    /// Canvas height (default 600).
    #[arg(long, default_value_t = viz::types::DEFAULT_HEIGHT)]
    height: u32,
    /// Margin around the treemap (default 80).
    #[arg(long, default_value_t = viz::types::DEFAULT_PADDING)]
    padding: u32,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    frame: FrameArgs,
    /// Output path; the extension picks the format.
    #[arg(short, long, default_value = "index.html")]
    out: PathBuf,
    /// Show the tooltip for the tile under this pointer position (X,Y in canvas pixels).
    #[arg(long, value_parser = parse_point)]
    hover: Option<Point>,
    /// TrueType font for PNG labels.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Page heading (HTML output).
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Directory to serve.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = server::DEFAULT_PORT)]
    port: u16,
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
}

#[derive(Args, Debug)]
struct FetchArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    frame: FrameArgs,
    /// Where to save: .json (dataset) or .csv (tiles).
    #[arg(short, long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Locale for thousands separators (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

/// Map a user-provided locale tag to a num-format Locale.
fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Serve(args) => cmd_serve(args),
        Command::Fetch(args) => cmd_fetch(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

/// Stage one of every command: obtain a validated dataset.
fn load(source: &SourceArgs) -> Result<DatasetNode> {
    let dataset = match &source.input {
        Some(path) => api::load_dataset(path)
            .with_context(|| format!("load dataset from {}", path.display()))?,
        None => Client::with_url(&source.url)
            .fetch()
            .with_context(|| format!("fetch dataset from {}", source.url))?,
    };
    log::info!("loaded dataset with {} movies", dataset.leaf_count());
    Ok(dataset)
}

fn frame(args: &FrameArgs) -> Result<RenderConfig> {
    let margins = u64::from(args.padding) * 2;
    if margins >= u64::from(args.width) || margins >= u64::from(args.height) {
        bail!(
            "padding {} leaves no room for a {}x{} chart",
            args.padding,
            args.width,
            args.height
        );
    }
    Ok(RenderConfig {
        width: args.width,
        height: args.height,
        padding: args.padding,
    })
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let cfg = frame(&args.frame)?;
    let dataset = load(&args.source)?;
    let mut rendered = viz::render(&dataset, &cfg);
    if let Some(p) = args.hover {
        rendered.apply_pointer_events(&[PointerEvent::Move(p)]);
        if rendered.surface.find_by_id(viz::tooltip::TOOLTIP_ID).is_none() {
            log::warn!("no tile under pointer ({}, {})", p.x, p.y);
        }
    }
    let mut page = PageConfig::default();
    if let Some(title) = args.title {
        page.title = title;
    }
    let kind = viz::save(&rendered, &args.out, &page, args.font.as_deref())?;
    eprintln!("Wrote {:?} to {}", kind, args.out.display());
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        root: args.dir,
        host: args.host,
        port: args.port,
    };
    if !config.root.join("index.html").exists() {
        log::warn!(
            "{} has no index.html; run `treemap render` first",
            config.root.display()
        );
    }
    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    runtime.block_on(server::run(config))
}

fn cmd_fetch(args: FetchArgs) -> Result<()> {
    let dataset = load(&args.source)?;
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("json")
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => storage::save_json(&dataset, &args.out)?,
        "csv" => {
            let cfg = frame(&args.frame)?;
            let rendered = viz::render(&dataset, &cfg);
            storage::save_tiles_csv(&rendered.layout, &args.out)?
        }
        other => bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} movies to {}", dataset.leaf_count(), args.out.display());
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let dataset = load(&args.source)?;
    let locale = map_locale(&args.locale);
    let fmt = |v: f64| (v.round() as i64).to_formatted_string(locale);
    let fmt_opt = |v: Option<f64>| v.map(fmt).unwrap_or_else(|| "NA".to_string());
    for s in stats::category_summary(&Hierarchy::from_dataset(&dataset)) {
        println!(
            "{:<10} count={:<3} total={} share={:.1}%  min={} max={} mean={} median={}",
            s.category,
            s.count,
            fmt(s.total),
            s.share * 100.0,
            fmt_opt(s.min),
            fmt_opt(s.max),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        );
    }
    Ok(())
}
