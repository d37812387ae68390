use anyhow::{bail, Result};

use crate::catalog;
use crate::commands::{fetch_listing, format_listing, listing_request};
use crate::config::Config;
use crate::data_provider::StatsDataProvider;
use crate::listing::ListFilter;

pub async fn run(
    provider: &dyn StatsDataProvider,
    slug: &str,
    name: Option<&str>,
    page: usize,
    config: &Config,
) -> Result<()> {
    let Some(team) = catalog::team_by_slug(slug) else {
        bail!("Unknown team '{}'. Run `hoops teams` for the list of slugs", slug);
    };
    let filter = ListFilter::Team(team.slug.to_string());
    let request = listing_request(filter, name.unwrap_or_default(), page, config);
    let players = fetch_listing(provider, &request).await?;
    let title = format!("{} ({})", team.name, team.code);
    print!("{}", format_listing(&title, request.page, &players, &config.display));
    Ok(())
}
