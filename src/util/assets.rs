use std::sync::OnceLock;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const STYLESHEET: &str = "main.css";

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// The dashboard stylesheet. An unreadable stylesheet renders the app
/// unstyled rather than refusing to start.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| embedded_text(STYLESHEET).unwrap_or_default())
}

fn embedded_text(name: &str) -> Option<String> {
    let Some(file) = EmbeddedAssets::get(name) else {
        tracing::error!(asset = name, "embedded asset missing");
        return None;
    };
    String::from_utf8(file.data.into_owned())
        .map_err(|err| tracing::error!(asset = name, "embedded asset is not UTF-8: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        let css = main_css();
        assert!(css.contains(".result-card"));
        assert!(css.contains(".score-badge.high"));
    }

    #[test]
    fn unknown_asset_is_none() {
        assert!(embedded_text("missing.svg").is_none());
    }
}
