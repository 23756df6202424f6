//! Route walk and file output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info};

use advisor_dashboard::{BasePath, History, MemoryHistory, NavigationShell, Route, render_page};

/// Name of the manifest written next to the pages.
pub const MANIFEST: &str = "routes.json";

/// One emitted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSpec {
    pub route: Route,
    pub href: String,
    /// Output path relative to the export directory, `/`-separated.
    pub file: String,
}

/// Pages to emit under `base`: every linkable route, then the 404 fallback.
pub fn plan(base: &BasePath) -> Vec<PageSpec> {
    let mut pages: Vec<PageSpec> = Route::LINKABLE
        .into_iter()
        .map(|route| {
            let file = match route {
                Route::Root => "index.html".to_string(),
                other => format!("{}/index.html", other.name()),
            };
            PageSpec {
                route,
                href: base.href(route),
                file,
            }
        })
        .collect();
    pages.push(PageSpec {
        route: Route::Unresolved,
        href: format!("{}404.html", base.as_str()),
        file: "404.html".to_string(),
    });
    pages
}

/// Loads each href the way the browser shell would and checks the route.
pub fn verify(pages: &[PageSpec], base: &BasePath) -> Result<()> {
    for page in pages {
        let shell = NavigationShell::new(MemoryHistory::new(page.href.as_str()), base.clone());
        if shell.route() != page.route {
            bail!(
                "{} resolves to {} instead of {} under base {}",
                page.href,
                shell.route(),
                page.route,
                base
            );
        }
        debug!(href = %page.href, route = %page.route, "href verified");
    }
    walk_links(pages, base)
}

/// From the root page, activates every linkable page and goes back, the way a
/// visitor clicking through the landing chooser would.
fn walk_links(pages: &[PageSpec], base: &BasePath) -> Result<()> {
    let history = MemoryHistory::new(base.as_str());
    let mounted = NavigationShell::new(history.clone(), base.clone()).mount();

    for page in pages.iter().filter(|p| p.route.suffix().is_some()) {
        let route = mounted.activate(page.route);
        let location = history.location();
        if route != page.route || location != page.href {
            bail!(
                "link to {} landed on {} at {} instead of {}",
                page.route,
                route,
                location,
                page.href
            );
        }
        history.back();
        if mounted.route() != Route::Root {
            bail!("back from {} left the shell on {}", page.href, mounted.route());
        }
    }
    Ok(())
}

/// Verifies, renders and writes every page plus the manifest into `out`.
pub fn export(out: &Path, base: &BasePath) -> Result<Vec<PathBuf>> {
    let pages = plan(base);
    verify(&pages, base)?;

    let mut written = Vec::with_capacity(pages.len() + 1);
    for page in &pages {
        let path = out.join(&page.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, render_page(page.route, base))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(route = %page.route, file = %path.display(), "page written");
        written.push(path);
    }

    let manifest = out.join(MANIFEST);
    let json = serde_json::to_string_pretty(&pages).context("Failed to serialize manifest")?;
    fs::write(&manifest, json)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;
    written.push(manifest);

    Ok(written)
}
