use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sceneport::assets::url::join_url;

#[derive(Parser, Debug)]
#[command(name = "sceneport", version)]
struct Cli {
    /// JSON file with import options; command-line flags override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every document of a studio project (.ccs).
    Project(ProjectArgs),
    /// Convert individual studio documents (.csd).
    Document(DocumentArgs),
}

#[derive(Args, Debug)]
struct Common {
    /// Output directory for converted artifacts.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Asset library index to load and update.
    #[arg(long)]
    library: Option<PathBuf>,

    /// Clip sample rate.
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Project file.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    common: Common,
}

#[derive(Parser, Debug)]
struct DocumentArgs {
    /// Documents to convert.
    #[arg(long = "in", required = true, num_args = 1..)]
    in_paths: Vec<PathBuf>,

    /// Directory document paths are relative to (defaults to the first document's directory).
    #[arg(long)]
    res_root: Option<PathBuf>,

    /// Name of the asset folder resources are registered under (defaults to the resource
    /// directory name).
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    common: Common,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let base = match &cli.config {
        Some(path) => sceneport::ImportOpts::load(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => sceneport::ImportOpts::default(),
    };
    match cli.cmd {
        Command::Project(args) => cmd_project(args, base),
        Command::Document(args) => cmd_document(args, base),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn apply_common(mut opts: sceneport::ImportOpts, common: &Common) -> sceneport::ImportOpts {
    if let Some(out) = &common.out {
        opts.out_dir = out.clone();
    }
    if let Some(fps) = common.fps {
        opts.fps = fps;
    }
    opts
}

fn open_library(path: Option<&Path>) -> anyhow::Result<sceneport::AssetLibrary> {
    match path {
        Some(p) if p.exists() => sceneport::AssetLibrary::load(p)
            .with_context(|| format!("load asset library '{}'", p.display())),
        _ => Ok(sceneport::AssetLibrary::with_builtin_assets()),
    }
}

fn save_library(lib: &sceneport::AssetLibrary, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(p) = path {
        lib.save(p)
            .with_context(|| format!("save asset library '{}'", p.display()))?;
        eprintln!("wrote {}", p.display());
    }
    Ok(())
}

fn cmd_project(args: ProjectArgs, base: sceneport::ImportOpts) -> anyhow::Result<()> {
    let opts = apply_common(base, &args.common);
    let library = open_library(args.common.library.as_deref())?;

    let (library, report, diag) = sceneport::import_project(library, opts, &args.in_path)
        .with_context(|| format!("import project '{}'", args.in_path.display()))?;

    print_summary(&report, &diag);
    save_library(&library, args.common.library.as_deref())
}

fn cmd_document(args: DocumentArgs, base: sceneport::ImportOpts) -> anyhow::Result<()> {
    let opts = apply_common(base, &args.common);
    let res_root = match &args.res_root {
        Some(root) => root.clone(),
        None => args
            .in_paths
            .first()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let name = match &args.name {
        Some(name) => name.clone(),
        None => std::fs::canonicalize(&res_root)
            .with_context(|| format!("resolve resource root '{}'", res_root.display()))?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "studio".to_owned()),
    };
    let root_url = join_url(&opts.assets_root_url, &name);

    let library = open_library(args.common.library.as_deref())?;
    let mut session = sceneport::ImportSession::new(library, opts, res_root.clone(), &root_url);
    session
        .import_resource_dir()
        .with_context(|| format!("register resources of '{}'", res_root.display()))?;
    for path in &args.in_paths {
        let source = match path.strip_prefix(&res_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => std::path::absolute(path)
                .with_context(|| format!("resolve '{}'", path.display()))?,
        };
        session
            .convert_document(&source)
            .with_context(|| format!("convert '{}'", path.display()))?;
    }

    let (library, report, diag) = session.finish();
    print_summary(&report, &diag);
    save_library(&library, args.common.library.as_deref())
}

fn print_summary(report: &sceneport::ImportReport, diag: &sceneport::Diagnostics) {
    for done in &report.converted {
        eprintln!("wrote {}", done.artifact.display());
        for clip in &done.clips {
            eprintln!("wrote {}", clip.display());
        }
    }
    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.source.display(), skipped.reason);
    }
    if !diag.is_empty() {
        eprintln!("{} diagnostic(s):", diag.len());
        for d in diag.entries() {
            eprintln!("  {} [{}] {}: {}", d.document, d.node, d.field, d.message);
        }
    }
}
