use anyhow::Result;

use crate::commands::{fetch_listing, format_listing, listing_request};
use crate::config::Config;
use crate::data_provider::StatsDataProvider;
use crate::listing::ListFilter;

pub async fn run(provider: &dyn StatsDataProvider, text: &str, page: usize, config: &Config) -> Result<()> {
    let request = listing_request(ListFilter::Search, text, page, config);
    let players = fetch_listing(provider, &request).await?;
    let title = format!("Player Search: \"{}\"", text.trim());
    print!("{}", format_listing(&title, request.page, &players, &config.display));
    Ok(())
}
