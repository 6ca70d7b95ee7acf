use anyhow::Result;
use applist::{AppSelection, BrowseOutcome};
use serde_json::json;

/// Print a plain-text representation of the browse outcome.
///
/// An accepted record prints as its name: the name is what identifies an
/// application to the dashboard and is the navigation target for a row.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if !outcome.accepted {
        println!("Browse cancelled (query: '{}')", outcome.query);
        return;
    }

    match &outcome.selection {
        Some(AppSelection { name, .. }) => println!("{name}"),
        None => println!("No selection"),
    }
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    let selection = match &outcome.selection {
        Some(app) => json!({
            "type": "app",
            "name": app.name,
            "url": app.url,
        }),
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "accepted": outcome.accepted,
        "query": outcome.query,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
