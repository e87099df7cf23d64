//! Show episode command handler

use crate::catalog::CatalogService;
use crate::models::Episode;

pub async fn cmd_show(catalog: &dyn CatalogService, identifier: &str) -> anyhow::Result<()> {
    let Some(context) = catalog.player(identifier).await? else {
        println!("Episode not found: {identifier}");
        println!("Use 'anistream list' to see IDs and slugs");
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&context.episode)?);
    println!();
    println!("Previous: {}", neighbour(context.previous.as_ref()));
    println!("Next:     {}", neighbour(context.next.as_ref()));

    Ok(())
}

fn neighbour(episode: Option<&Episode>) -> String {
    episode.map_or_else(
        || "-".to_string(),
        |e| format!("{} ({})", e.slug, e.episode),
    )
}
