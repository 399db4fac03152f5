//! `criteria catalog`: list categories, or one category's suggestions

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::catalog::CategoryCatalog;

/// Options for the catalog command
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Show one category in detail
    pub category: Option<String>,
    /// Filter suggestions (case-insensitive substring)
    pub query: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryDetail<'a> {
    name: &'a str,
    placeholder: &'a str,
    suggestions: Vec<&'a str>,
    explorer_groups: &'a [String],
}

/// Execute the catalog command
pub fn execute_catalog(catalog: &CategoryCatalog, options: CatalogOptions) -> Result<()> {
    let Some(name) = options.category.as_deref() else {
        if options.json {
            println!("{}", serde_json::to_string_pretty(catalog)?);
            return Ok(());
        }
        for category in catalog.iter() {
            let mut flags = Vec::new();
            if category.supports_browse {
                flags.push("browse");
            }
            if category.supports_boolean {
                flags.push("boolean");
            }
            println!(
                "{} {} {}",
                style(&category.name).bold(),
                style(&category.placeholder).dim(),
                style(flags.join(", ")).cyan()
            );
        }
        return Ok(());
    };

    let category = catalog.require(name)?;
    let detail = CategoryDetail {
        name: &category.name,
        placeholder: &category.placeholder,
        suggestions: catalog.suggest(name, options.query.as_deref().unwrap_or(""))?,
        explorer_groups: if category.supports_browse {
            catalog.explorer_groups(name)?
        } else {
            &[]
        },
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{}", style(detail.name).bold());
    println!("  {}", style(&category.search.header).underlined());
    if detail.suggestions.is_empty() {
        println!("    {}", style("no matches").dim());
    }
    for item in &detail.suggestions {
        println!("    {item}");
    }
    if !detail.explorer_groups.is_empty() {
        println!("  {}", style("Browse all").underlined());
        for group in detail.explorer_groups {
            println!("    {group}");
        }
    }
    Ok(())
}
