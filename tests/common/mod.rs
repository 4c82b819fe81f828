//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use herbal_catalog::catalog::{encode, Catalog, CatalogEntry};
use herbal_catalog::shell::{HostShell, NavigationParams, Route, DATA_PARAM};
use herbal_catalog::ui::app::App;
use std::path::PathBuf;
use tempfile::TempDir;

// -- Host shell mock ----------------------------------------------------------

/// Host shell that records every call verbatim.
#[derive(Debug, Default)]
pub struct MockShell {
    pub navigations: Vec<(Route, NavigationParams)>,
    pub titles: Vec<String>,
}

impl MockShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.navigations.len() + self.titles.len()
    }
}

impl HostShell for MockShell {
    fn navigate(&mut self, route: Route, params: NavigationParams) {
        self.navigations.push((route, params));
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }
}

// -- Fixtures -----------------------------------------------------------------

pub fn builtin_entry(id: u32) -> CatalogEntry {
    Catalog::builtin()
        .get(id)
        .cloned()
        .unwrap_or_else(|| panic!("no builtin entry {id}"))
}

/// Parameters exactly as the catalog screen would send them for `entry`.
pub fn data_params(entry: &CatalogEntry) -> NavigationParams {
    raw_data_params(&encode(entry).expect("builtin entries encode"))
}

/// Parameters with an arbitrary, possibly broken, `data` value.
pub fn raw_data_params(raw: &str) -> NavigationParams {
    let mut params = NavigationParams::new();
    params.insert(DATA_PARAM.to_string(), raw.to_string());
    params
}

pub fn make_app() -> App {
    App::new(Catalog::builtin(), true)
}

/// Writes `content` to `<tempdir>/<name>`.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
