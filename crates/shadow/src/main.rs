mod report;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use shadow_tree::{Point, SyntaxTree};
use tracing_subscriber::EnvFilter;

/// Inspect syntax trees produced by the parser worker.
#[derive(Parser)]
enum Options {
    /// Print the tree, one node per line.
    Dump { path: Utf8PathBuf },
    /// Print the deepest node containing a point.
    Locate {
        path: Utf8PathBuf,
        #[arg(long)]
        row: u32,
        #[arg(long)]
        column: u32,
    },
    /// Print the span of every error node.
    Errors { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Options::parse() {
        Options::Dump { path } => {
            let tree = load(&path)?;
            print!("{}", tree.root_node().debug_tree());
        }
        Options::Locate { path, row, column } => {
            let tree = load(&path)?;
            println!("{}", report::locate(&tree, Point::new(row, column)));
        }
        Options::Errors { path } => {
            let tree = load(&path)?;
            print!("{}", report::errors(&tree));
        }
    }

    Ok(())
}

fn load(path: &Utf8Path) -> anyhow::Result<SyntaxTree> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))?;
    let snapshot = shadow_snapshot::decode_tree(&json)
        .with_context(|| format!("failed to decode `{path}`"))?;

    let tree = SyntaxTree::build(&snapshot);
    tracing::info!(%path, nodes = tree.node_count(), has_errors = tree.has_errors(), "loaded tree");
    Ok(tree)
}
