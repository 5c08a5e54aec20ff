//! devfonts CLI

use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use devfonts_core::assets::{load_best_effort, AssetResolver, LogAssetLoader};
use devfonts_core::catalog::{suggest, Catalog};
use devfonts_core::filter::FilterState;
use devfonts_core::output::{write_json_pretty, write_ndjson};
use devfonts_core::state::{BrowserState, FontView};

pub mod server;

/// Environment variable naming a catalog file to use instead of the built-in one.
pub const CATALOG_ENV: &str = "DEVFONTS_CATALOG";
/// Environment variable overriding the base URL of the highlighting assets.
pub const ASSET_BASE_ENV: &str = "DEVFONTS_ASSET_BASE";

/// CLI entrypoint for devfonts.
#[derive(Debug, Parser)]
#[command(name = "devfonts", about = "Browse, filter and compare programming fonts")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List fonts that pass the filters
    List(ListArgs),
    /// List highlighting themes
    Themes(NamesArgs),
    /// List languages and their highlighting modes
    Languages(NamesArgs),
    /// Suggest font names for a partial input
    Suggest(SuggestArgs),
    /// Show the asset URLs for a theme/language pair
    Assets(AssetsArgs),
    /// Serve the browser state over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Catalog JSON file (defaults to $DEVFONTS_CATALOG, then the built-in catalog)
    #[arg(long = "catalog", value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SelectionArgs {
    /// Highlighting theme
    #[arg(long = "theme")]
    theme: Option<String>,

    /// Preview language
    #[arg(long = "language")]
    language: Option<String>,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(flatten)]
    selection: SelectionArgs,

    /// Only fonts without a price
    #[arg(long = "free", action = ArgAction::SetTrue)]
    free: bool,

    /// Only fonts with ligatures
    #[arg(long = "ligatures", action = ArgAction::SetTrue)]
    ligatures: bool,

    /// Case-insensitive part of the display name
    #[arg(short = 'n', long = "name", default_value = "")]
    name: String,

    /// Fonts to add to the compare set (display names; a name given more than once is added once)
    #[arg(short = 'c', long = "compare", value_delimiter = ',')]
    compare: Vec<String>,

    /// Only show fonts in the compare set
    #[arg(long = "compare-mode", action = ArgAction::SetTrue)]
    compare_mode: bool,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct NamesArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Emit a JSON array
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct SuggestArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Partial font name
    #[arg(default_value = "")]
    input: String,
}

#[derive(Debug, Args)]
struct AssetsArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(flatten)]
    selection: SelectionArgs,

    /// Emit JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ServeArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Address to listen on
    #[arg(long = "bind", default_value = "127.0.0.1:8765")]
    bind: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::List(args) => run_list(args),
        Command::Themes(args) => run_themes(args),
        Command::Languages(args) => run_languages(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Assets(args) => run_assets(args),
        Command::Serve(args) => run_serve(args),
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run_list(args: ListArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let state = build_state(catalog, &args)?;
    load_best_effort(&LogAssetLoader, &state.assets(&asset_resolver()));

    let view = state.view();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.ndjson {
        write_ndjson(&view.fonts, &mut handle)?;
    } else if args.json {
        write_json_pretty(&view.fonts, &mut handle)?;
    } else if args.columns {
        write_columns(&view.fonts, &mut handle, use_color)?;
    } else {
        write_plain(&view.fonts, &mut handle, use_color)?;
    }

    Ok(())
}

fn run_themes(args: NamesArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let mut handle = io::stdout().lock();

    if args.json {
        return write_json_pretty(&catalog.themes, &mut handle);
    }
    for theme in &catalog.themes {
        writeln!(handle, "{}", theme.name)?;
    }
    Ok(())
}

fn run_languages(args: NamesArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let mut handle = io::stdout().lock();

    if args.json {
        return write_json_pretty(&catalog.languages, &mut handle);
    }
    let width = catalog
        .languages
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(0);
    for language in &catalog.languages {
        writeln!(handle, "{:<width$}  {}", language.name, language.mode)?;
    }
    Ok(())
}

fn run_suggest(args: SuggestArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let mut handle = io::stdout().lock();

    for name in suggest(&catalog, &args.input) {
        writeln!(handle, "{name}")?;
    }
    Ok(())
}

fn run_assets(args: AssetsArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let state = apply_selection(BrowserState::new(Arc::new(catalog))?, &args.selection)?;
    let request = state.assets(&asset_resolver());
    let mut handle = io::stdout().lock();

    if args.json {
        let json = serde_json::to_string_pretty(&request)?;
        writeln!(handle, "{json}")?;
    } else {
        writeln!(handle, "{}", request.mode_script)?;
        writeln!(handle, "{}", request.theme_stylesheet)?;
    }
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let state = BrowserState::new(Arc::new(catalog))?;
    let app = server::AppState::new(state, asset_resolver());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(server::serve(&args.bind, app))
}

/// Resolve the catalog: explicit path, then `DEVFONTS_CATALOG`, then the built-in one.
fn load_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = explicit {
        return Catalog::from_path(path);
    }

    if let Ok(raw) = env::var(CATALOG_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Catalog::from_path(Path::new(trimmed))
                .with_context(|| format!("{CATALOG_ENV} is set to an unusable catalog"));
        }
    }

    Catalog::builtin()
}

fn asset_resolver() -> AssetResolver {
    match env::var(ASSET_BASE_ENV) {
        Ok(base) if !base.trim().is_empty() => AssetResolver::new(base.trim()),
        _ => AssetResolver::default(),
    }
}

fn build_state(catalog: Catalog, args: &ListArgs) -> Result<BrowserState> {
    let state = apply_selection(BrowserState::new(Arc::new(catalog))?, &args.selection)?;

    let filters = FilterState::new()
        .require_free(args.free)
        .require_ligatures(args.ligatures)
        .with_name(args.name.as_str());
    let mut state = state.with_filters(filters);

    for name in dedup_names(&args.compare) {
        if state.catalog().font_by_display_name(&name).is_none() {
            log::warn!("{name} is not in the catalog");
        }
        state = state.toggle_compare(&name);
    }

    Ok(state.with_compare_mode(args.compare_mode))
}

fn apply_selection(state: BrowserState, selection: &SelectionArgs) -> Result<BrowserState> {
    let state = match &selection.theme {
        Some(theme) => state.with_theme(theme)?,
        None => state,
    };
    let state = match &selection.language {
        Some(language) => state.with_language(language)?,
        None => state,
    };
    Ok(state)
}

/// Trim, drop empties and keep the first occurrence of each name.
fn dedup_names(raw: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw {
        let name = name.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

fn write_plain(fonts: &[FontView], mut w: impl Write, color: bool) -> Result<()> {
    for item in fonts {
        let rendered = apply_color(&item.font.display_name, color, AnsiColor::Cyan);
        writeln!(w, "{rendered}")?;
    }
    Ok(())
}

fn write_columns(fonts: &[FontView], mut w: impl Write, color: bool) -> Result<()> {
    let rows: Vec<(String, String, String)> = fonts
        .iter()
        .map(|item| {
            let price = item
                .font
                .price
                .clone()
                .unwrap_or_else(|| "free".to_string());
            let flags = format!(
                "{:<5}{}{}",
                price,
                if item.font.ligatures { " lig" } else { "" },
                if item.in_compare { " compare" } else { "" },
            );
            (
                item.font.display_name.clone(),
                item.font.family_name.clone(),
                flags,
            )
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).clamp(0, 60);
    let family_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).clamp(0, 60);

    for (name, family, flags) in rows {
        let padded_name = format!("{:<name_width$}", name);
        let padded_family = format!("{:<family_width$}", family);
        let rendered_name = apply_color(&padded_name, color, AnsiColor::Cyan);
        let rendered_family = apply_color(&padded_family, color, AnsiColor::Yellow);
        let rendered_flags = apply_color(&flags, color, AnsiColor::Green);

        writeln!(w, "{rendered_name}  {rendered_family}  {rendered_flags}")?;
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
