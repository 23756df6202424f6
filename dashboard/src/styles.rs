//! CSS for the dashboard pages.
//!
//! Split by concern so each page assembly only ships what it uses:
//!
//! - [`BASE_CSS`]: reset, design tokens and body defaults (document head)
//! - [`COMPONENT_CSS`]: appearance of the leaf components, shared by both layouts
//! - [`FIXED_CSS`]: absolute positioning inside the 1440x1024 frame
//! - [`RESPONSIVE_CSS`]: flow layout with relative units
//! - [`LANDING_CSS`]: the landing chooser
//!
//! Hover effects live here as `:hover` rules rather than in event handlers.
//!
//! # Customization
//!
//! ```rust
//! use advisor_dashboard::styles::{BASE_CSS, COMPONENT_CSS};
//!
//! let my_css = ".client-card { border-radius: 8px; }";
//! let combined = format!("{}\n{}\n{}", BASE_CSS, COMPONENT_CSS, my_css);
//! assert!(combined.contains("--text-bright"));
//! ```

/// Reset and design tokens.
pub const BASE_CSS: &str = r#"
:root {
    --surface-base: #12161b;
    --surface-level-2: #22272e;
    --surface-level-3: #2e353d;
    --surface-level-4: #3a424c;
    --border-subtle: #30353f;
    --text-bright: #e6eaf0;
    --text-subtle: #aeb4bc;
    --text-muted: #7a828d;
    --font-serif: Noto Serif JP, serif;
    --font-sans: Inter, sans-serif;
    --font-body: GT Walsheim Trial, Inter, sans-serif;
    --font-chip: Plus Jakarta Sans, Inter, sans-serif;
    --font-mono: IBM Plex Mono, monospace;
    --backdrop: linear-gradient(-21.416deg, rgba(45, 49, 60, 0) 52.123%, rgba(45, 49, 60, 0.7) 100%);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    padding: 0;
    min-height: 100%;
}

body {
    background-color: var(--surface-base);
    color: var(--text-bright);
    font-family: var(--font-sans);
}

button {
    background: none;
    border: none;
    padding: 0;
    color: inherit;
    font: inherit;
    cursor: pointer;
}

h1, h2, h3, p {
    margin: 0;
}
"#;

/// Leaf component appearance, identical in both layouts.
pub const COMPONENT_CSS: &str = r#"
.page {
    position: relative;
    background-color: var(--surface-base);
}

.page-backdrop {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background-image: var(--backdrop);
}

/* Top navigation */
.top-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    z-index: 1;
}

.top-nav-start {
    display: flex;
    align-items: center;
    gap: 16px;
    padding-right: 16px;
    color: var(--text-subtle);
}

.top-nav-actions {
    display: flex;
    align-items: center;
    justify-content: flex-end;
    gap: 16px;
}

.add-client-button {
    display: flex;
    align-items: center;
    gap: 10px;
    height: 40px;
    padding: 14px 16px;
    border-radius: 80px;
    border: 1px solid var(--text-muted);
    color: var(--text-muted);
    white-space: nowrap;
    line-height: 1.2;
    letter-spacing: -0.3px;
}

.clients-menu {
    position: relative;
}

.clients-menu-trigger {
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 4px 16px 4px 5px;
    border-radius: 80px;
    background-color: var(--surface-level-3);
    color: var(--text-subtle);
    white-space: nowrap;
}

.clients-menu-badge {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border-radius: 32px;
    background-color: var(--surface-level-4);
}

.clients-menu-popup {
    position: absolute;
    right: 0;
    top: calc(100% + 8px);
    min-width: 200px;
    margin: 0;
    padding: 4px;
    list-style: none;
    background-color: var(--surface-level-3);
    border: 1px solid var(--border-subtle);
    border-radius: 8px;
    z-index: 10;
}

.clients-menu-item {
    display: block;
    width: 100%;
    text-align: left;
    padding: 8px 12px;
    font-size: 14px;
    color: var(--text-subtle);
    border-radius: 4px;
}

.clients-menu-item:hover,
.clients-menu-item.active {
    background-color: var(--surface-level-4);
}

/* Hero */
.hero-title {
    font-family: var(--font-serif);
    font-weight: 400;
    line-height: 1.1;
    color: var(--text-bright);
}

/* Search */
.search-section-stack {
    display: flex;
    flex-direction: column;
    width: 100%;
}

.search-bar {
    width: 100%;
    padding: 1px;
    border-radius: 24px;
    background: linear-gradient(135deg, rgba(222, 155, 133, 0.4) 0%, rgba(95, 115, 155, 0.6) 15%, #30353f 30%, #30353f 70%, rgba(95, 115, 155, 0.6) 85%, rgba(222, 155, 133, 0.4) 100%);
}

.search-bar-inner {
    display: flex;
    align-items: center;
    gap: 16px;
    padding: 16px;
    border-radius: 24px;
    background-image: linear-gradient(-83.08deg, rgba(46, 48, 60, 0) 23.672%, rgba(46, 48, 60, 0.8) 98.225%), linear-gradient(90deg, #2e353d 0%, #2e353d 100%);
}

.search-input {
    flex: 1 0 0;
    min-width: 0;
    background: transparent;
    border: none;
    outline: none;
    font-family: var(--font-sans);
    font-weight: 300;
    font-size: 18px;
    color: var(--text-subtle);
}

.search-submit {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    padding: 2px;
    border-radius: 12px;
    color: var(--text-subtle);
}

.filter-chips {
    display: flex;
    align-items: center;
}

.filter-chip {
    padding: 1px;
    border-radius: 80px;
    background: linear-gradient(135deg, rgba(174, 180, 188, 0.3) 0%, rgba(174, 180, 188, 0.05) 50%, rgba(174, 180, 188, 0.3) 100%);
    flex-shrink: 0;
}

.filter-chip-button {
    display: flex;
    align-items: center;
    width: 100%;
    padding: 14px 16px;
    border-radius: 80px;
    background-color: var(--surface-level-2);
}

.filter-chip-label {
    font-family: var(--font-chip);
    font-size: 14px;
    line-height: 1.2;
    letter-spacing: -0.3px;
    color: var(--text-subtle);
    white-space: nowrap;
}

/* Client lists */
.client-lists-label {
    font-family: var(--font-mono);
    font-weight: 400;
    letter-spacing: 1px;
    color: var(--text-muted);
    text-transform: uppercase;
}

.client-lists-grid {
    display: grid;
}

.client-card {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    justify-content: space-between;
    width: 100%;
    padding: 24px;
    border-radius: 20px;
    text-align: left;
    background-image: linear-gradient(-64.099deg, #1a1e24 69.652%, #282d36 91.117%);
    transition: transform 0.2s;
}

.client-card:hover {
    transform: scale(1.02);
}

.client-card-header {
    display: flex;
    flex-direction: column;
    gap: 8px;
    width: 100%;
}

.client-card-heading {
    display: flex;
    align-items: center;
    justify-content: space-between;
    width: 100%;
}

.client-card-title {
    flex: 1 0 0;
    font-weight: 500;
    font-size: 20px;
    line-height: 1.2;
    letter-spacing: -0.5px;
    color: var(--text-bright);
}

.client-card-description {
    max-width: 240px;
    font-family: var(--font-body);
    font-size: 16px;
    line-height: 1.2;
    letter-spacing: -0.3px;
    color: var(--text-muted);
}

.client-card-footer {
    display: flex;
    align-items: center;
    gap: 24px;
}

.client-card-tally {
    display: flex;
    align-items: baseline;
    gap: 4px;
    white-space: nowrap;
}

.client-card-count {
    font-size: 16px;
    color: var(--text-subtle);
}

.client-card-unit {
    font-family: var(--font-mono);
    font-size: 10px;
    letter-spacing: 1px;
    text-transform: uppercase;
    color: var(--text-muted);
}

.client-card-meter {
    width: 128px;
    height: 14px;
}

.icon-badge {
    display: flex;
    align-items: center;
    padding: 6px;
    border-radius: 32px;
    background-color: var(--surface-level-3);
    flex-shrink: 0;
}

.icon-badge-slot {
    width: 16px;
    height: 16px;
    color: var(--text-subtle);
}

/* Footer */
.customize-button {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--text-muted);
    transition: color 0.2s;
}

.customize-button:hover {
    color: var(--text-subtle);
}

.customize-label {
    font-size: 16px;
    line-height: 1.2;
    letter-spacing: -0.3px;
}
"#;

/// Absolute positioning at design coordinates.
pub const FIXED_CSS: &str = r#"
.page--fixed {
    width: 1440px;
    height: 1024px;
    margin: 0 auto;
}

.page--fixed .top-nav {
    position: absolute;
    left: 32px;
    top: 22px;
    width: 1376px;
    height: 40px;
}

.page--fixed .top-nav-actions {
    width: 701px;
}

.page--fixed .hero {
    position: absolute;
    left: 207px;
    top: 127px;
    width: 1067px;
    height: 41px;
}

.page--fixed .hero-title {
    font-size: 56px;
    letter-spacing: -2px;
}

.page--fixed .search-section {
    position: absolute;
    left: 294px;
    top: 276px;
    width: 852px;
    height: 130px;
}

.page--fixed .search-section-stack {
    gap: 20px;
    height: 100%;
}

.page--fixed .filter-chips {
    gap: 8px;
}

.page--fixed .client-lists-label {
    position: absolute;
    left: 207px;
    top: 485.5px;
    font-size: 14px;
}

.page--fixed .client-lists-grid {
    position: absolute;
    left: 207px;
    top: 519px;
    width: 1029px;
    grid-template-columns: 329px 331px 329px;
    grid-template-rows: 175px 175px;
    gap: 20px;
}

.page--fixed .page-footer-bar {
    position: absolute;
    left: 667.5px;
    top: 974px;
    width: 105px;
    height: 24px;
}
"#;

/// Flow layout: centered column, wrapping chips, auto-filling grid.
pub const RESPONSIVE_CSS: &str = r#"
.page--responsive {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.page--responsive .page-nav {
    width: 100%;
    padding: 1.375rem 1rem;
    position: relative;
    z-index: 1;
}

.page--responsive .top-nav-actions {
    flex-wrap: wrap;
    gap: 1rem;
}

.page--responsive .page-main,
.page--responsive .page-footer {
    width: 100%;
    max-width: 1440px;
    padding: 0 2rem;
    position: relative;
    z-index: 1;
}

.page--responsive .page-main {
    display: flex;
    flex-direction: column;
    flex: 1;
}

.page--responsive .page-hero {
    margin-top: clamp(2rem, 6vw, 4.5rem);
}

.page--responsive .hero-title {
    font-size: clamp(2.25rem, 5vw, 3.5rem);
    letter-spacing: -0.125rem;
}

.page--responsive .page-search {
    margin-top: clamp(2rem, 5vw, 4rem);
    margin-bottom: clamp(2rem, 6vw, 4rem);
}

.page--responsive .search-section-stack {
    gap: 1.25rem;
    max-width: 852px;
    margin: 0 auto;
}

.page--responsive .filter-chips {
    flex-wrap: wrap;
    gap: 0.5rem;
    justify-content: flex-start;
}

.page--responsive .client-lists {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    width: 100%;
}

.page--responsive .client-lists-label {
    font-size: 0.875rem;
    letter-spacing: 0.0625rem;
}

.page--responsive .client-lists-grid {
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
    gap: 1.25rem;
    width: 100%;
}

.page--responsive .page-footer-bar {
    display: flex;
    justify-content: center;
    padding: 2rem 0;
}
"#;

/// Landing chooser.
pub const LANDING_CSS: &str = r#"
.landing {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 2rem;
    padding: 2rem;
    background-color: var(--surface-base);
    color: var(--text-bright);
}

.landing-title {
    font-family: var(--font-serif);
    font-size: 3rem;
}

.landing-links {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
    justify-content: center;
}

.landing-link {
    padding: 1rem 2rem;
    background-color: var(--surface-level-3);
    color: var(--text-subtle);
    text-decoration: none;
    border-radius: 0.5rem;
    border: 1px solid var(--border-subtle);
}

.landing-link:hover {
    color: var(--text-bright);
}

.landing-note {
    max-width: 600px;
    text-align: center;
    color: var(--text-muted);
}
"#;

/// Content Security Policy for prerendered pages (no scripts, inline styles only).
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none'; font-src 'self' data:;";
