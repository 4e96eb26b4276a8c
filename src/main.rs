use std::path::Path;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use shopping_optimizer_rs::catalog::{load_catalog, save_catalog};
use shopping_optimizer_rs::cli::{Cli, Command, OptimizeArgs};
use shopping_optimizer_rs::error::{Result, ShopError};
use shopping_optimizer_rs::interface::{
    collect_basket_params, display_basket, display_catalog_overview, display_params,
    write_basket_csv,
};
use shopping_optimizer_rs::models::BasketParams;
use shopping_optimizer_rs::optimizer::build_basket;
use shopping_optimizer_rs::state::{load_params, save_params};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let ShopError::CatalogNotFound(_) = e {
            eprintln!("Point --catalog at the cleaned catalog CSV (default data/eso_new_ver1.csv).");
        }
        std::process::exit(1);
    }
}

/// Log to stderr so basket output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Optimize(args) => cmd_optimize(&cli.catalog, &cli.params, &args),
        Command::Catalog { clean } => cmd_catalog(&cli.catalog, clean.as_deref()),
        Command::Params { reset } => cmd_params(&cli.params, reset),
    }
}

/// Saved parameters if present, otherwise the defaults.
fn saved_or_default(params_path: &Path) -> Result<BasketParams> {
    Ok(load_params(params_path)?.unwrap_or_default())
}

/// Build and display a basket.
fn cmd_optimize(
    catalog_path: &Path,
    params_path: &Path,
    args: &OptimizeArgs,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    println!("Loaded {} catalog items", catalog.len());

    let base = args.apply(saved_or_default(params_path)?);

    let (params, mut excluded) = if args.interactive {
        collect_basket_params(&catalog, &base)?
    } else {
        (base, Vec::new())
    };
    excluded.extend(args.exclude.iter().cloned());

    let catalog = catalog.excluding(&excluded);
    if !excluded.is_empty() {
        println!("Excluded {}; {} items remain", excluded.join(", "), catalog.len());
    }

    let (basket, summary) = build_basket(catalog.items(), &params);
    display_basket(&basket, &summary, &params);

    if let Some(path) = &args.export {
        if basket.is_empty() {
            println!("Nothing to export.");
        } else {
            write_basket_csv(path, &basket)?;
            println!("Basket written to {}", path.display());
        }
    }

    if args.save {
        save_params(params_path, &params)?;
        println!("Parameters saved to {}", params_path.display());
    }

    Ok(())
}

/// Show what the catalog offers, optionally writing a cleaned copy.
fn cmd_catalog(catalog_path: &Path, clean: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    display_catalog_overview(&catalog);

    if let Some(path) = clean {
        save_catalog(path, &catalog)?;
        println!("Normalized catalog written to {}", path.display());
    }

    Ok(())
}

/// Show or reset the saved parameters.
fn cmd_params(params_path: &Path, reset: bool) -> Result<()> {
    if reset {
        save_params(params_path, &BasketParams::default())?;
        println!("Parameters reset to defaults.");
    } else if load_params(params_path)?.is_none() {
        println!("No saved parameters at {}; showing defaults.", params_path.display());
    }

    display_params(&saved_or_default(params_path)?);
    Ok(())
}
