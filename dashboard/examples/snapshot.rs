//! Render one route to a standalone HTML file.
//!
//! Run with: `cargo run --example snapshot -- homepage-responsive /app/`

use advisor_dashboard::{BasePath, Route, render_page};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "homepage".into());
    let base = BasePath::new(args.next().unwrap_or_default());

    let route = Route::ALL
        .into_iter()
        .find(|r| r.name() == name)
        .unwrap_or(Route::Unresolved);

    let html = render_page(route, &base);

    let output_path = format!("{}.html", route.name());
    std::fs::write(&output_path, &html)?;

    println!("{route} under {base} written to: {output_path}");
    println!("HTML size: {} bytes", html.len());
    Ok(())
}
