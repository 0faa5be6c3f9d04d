//! Extraction of the names embedded in the website's HTML.
//!
//! The page is rendered by Next.js, which ships the page props as JSON in a
//! `<script id="__NEXT_DATA__">` tag. The names live at
//! `props.pageProps.names`.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::names::Name;

/// Regex for the embedded Next.js data script. Captures the script body.
static NEXT_DATA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*\bid\s*=\s*["']__NEXT_DATA__["'][^>]*>(.*?)</script\s*>"#)
        .expect("NEXT_DATA_REGEX must compile")
});

#[derive(Debug, Deserialize)]
struct NextData {
    props: Props,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Props {
    page_props: PageProps,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    #[serde(default)]
    names: Vec<Name>,
}

/// Extract all name records from the HTML of the names page.
pub fn extract_names(html: &str) -> Result<Vec<Name>> {
    let script = NEXT_DATA_REGEX
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| anyhow!("no <script id='__NEXT_DATA__'> tag found"))?;

    let data: NextData = serde_json::from_str(script.as_str().trim())
        .context("parsing JSON in <script id='__NEXT_DATA__'> tag")?;

    Ok(data.props.page_props.names)
}
