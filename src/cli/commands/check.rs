//! Check stream directory command handler

use crate::catalog::CatalogService;

pub async fn cmd_check(catalog: &dyn CatalogService) -> anyhow::Result<()> {
    let report = catalog.scan().await?;

    println!("Stream files: {}", report.files);
    println!("Records:      {}", report.records);
    println!("Episodes:     {}", report.episodes);

    if report.skipped.is_empty() {
        println!();
        println!("✓ All stream files parsed");
        return Ok(());
    }

    println!();
    println!("Skipped ({}):", report.skipped.len());
    for name in &report.skipped {
        println!("  ✗ {name}");
    }

    Ok(())
}
