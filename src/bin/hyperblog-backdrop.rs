use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use hyperblog_backdrop::{Backdrop, BackdropInput};

#[derive(Parser, Debug)]
#[command(name = "hyperblog-backdrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed backdrop (tiling + style directives) as JSON.
    Plan(CommonArgs),
    /// Write a standalone HTML page.
    Html(OutArgs),
    /// Write an SVG export sized to the input viewport.
    Svg(OutArgs),
    /// Rasterize the SVG export to PNG.
    Png(OutArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Input JSON (text, config, spotlight, viewport, palette). Defaults apply when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Override the label from the input document.
    #[arg(long)]
    text: Option<String>,
}

#[derive(Parser, Debug)]
struct OutArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Html(args) => cmd_html(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn load_input(args: &CommonArgs) -> anyhow::Result<BackdropInput> {
    let mut input = match &args.in_path {
        Some(path) => BackdropInput::load(path)?,
        None => BackdropInput::default(),
    };
    if let Some(text) = &args.text {
        input.text = Some(text.clone());
    }
    Ok(input)
}

fn render(input: &BackdropInput) -> Backdrop {
    hyperblog_backdrop::render_backdrop(input.text.as_deref(), &input.config, &input.spotlight)
}

fn write_text(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_plan(args: CommonArgs) -> anyhow::Result<()> {
    let input = load_input(&args)?;
    let backdrop = render(&input);
    println!("{}", backdrop.to_json_pretty()?);
    Ok(())
}

fn cmd_html(args: OutArgs) -> anyhow::Result<()> {
    let input = load_input(&args.common)?;
    let backdrop = render(&input);
    let page = hyperblog_backdrop::render_page(&backdrop, &input.palette);
    write_text(&args.out, &page)
}

fn cmd_svg(args: OutArgs) -> anyhow::Result<()> {
    let input = load_input(&args.common)?;
    let backdrop = render(&input);
    let svg = hyperblog_backdrop::render_svg(&backdrop, &input.viewport, &input.palette);
    write_text(&args.out, &svg)
}

fn cmd_png(args: OutArgs) -> anyhow::Result<()> {
    let input = load_input(&args.common)?;
    let backdrop = render(&input);
    let svg = hyperblog_backdrop::render_svg(&backdrop, &input.viewport, &input.palette);
    let frame = hyperblog_backdrop::rasterize_svg(&svg)?;
    hyperblog_backdrop::save_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
