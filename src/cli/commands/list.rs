//! List episodes command handler

use crate::catalog::CatalogService;

pub async fn cmd_list(catalog: &dyn CatalogService, page: usize) -> anyhow::Result<()> {
    let page = catalog.page(page.max(1)).await?;

    if page.total_items == 0 {
        println!("No episodes found.");
        println!();
        println!("Put stream files (NNNNNNNNN.json) in the stream directory.");
        return Ok(());
    }

    println!(
        "Episodes ({} total) - Page {} of {}",
        page.total_items, page.current_page, page.total_pages
    );
    println!("{:-<70}", "");

    for episode in &page.items {
        println!("• {} [{}]", episode.display_title(), episode.date);
        println!(
            "  ID: {} | Slug: {} | Servers: {}",
            episode.id,
            if episode.slug.is_empty() { "-" } else { episode.slug.as_str() },
            episode.servers.len()
        );
    }

    if page.has_next() {
        println!();
        println!("Next page: anistream list --page {}", page.current_page + 1);
    }

    Ok(())
}
