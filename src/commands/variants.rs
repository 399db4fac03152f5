//! `criteria variants`: list the panel layouts

use anyhow::Result;
use console::style;
use serde_json::json;

use crate::view::Variant;

/// Execute the variants command
pub fn execute_variants(current: Variant, json: bool) -> Result<()> {
    if json {
        let list: Vec<_> = Variant::all()
            .iter()
            .map(|v| {
                json!({
                    "variant": v,
                    "mode": v.mode(),
                    "description": v.description(),
                    "current": *v == current,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    for variant in Variant::all() {
        let marker = if *variant == current {
            style("●").green()
        } else {
            style("○").dim()
        };
        println!(
            "{} {} {:<8} {}",
            marker,
            style(variant.name()).bold(),
            variant.mode().as_str(),
            variant.description()
        );
    }
    Ok(())
}
