use anyhow::{bail, Result};

use crate::catalog::PositionCategory;
use crate::commands::{fetch_listing, format_listing, listing_request};
use crate::config::Config;
use crate::data_provider::StatsDataProvider;
use crate::listing::ListFilter;

pub async fn run(
    provider: &dyn StatsDataProvider,
    key: &str,
    name: Option<&str>,
    page: usize,
    config: &Config,
) -> Result<()> {
    let Some(category) = PositionCategory::from_key(key) else {
        bail!("Unknown position '{}'. Use guards, forwards or centers", key);
    };
    let filter = ListFilter::Position(category.key().to_string());
    let request = listing_request(filter, name.unwrap_or_default(), page, config);
    let players = fetch_listing(provider, &request).await?;
    print!(
        "{}",
        format_listing(&request.filter.title(), request.page, &players, &config.display)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_unknown_position_is_an_error() {
        let provider = ScriptedProvider::new();
        let err = run(&provider, "goalies", None, 1, &Config::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown position 'goalies'"));
        assert!(provider.recorded_queries().is_empty());
    }

    #[tokio::test]
    async fn test_centers_query_codes() {
        let provider = ScriptedProvider::new();
        run(&provider, "Centers", None, 1, &Config::default())
            .await
            .unwrap();
        assert_eq!(provider.recorded_queries()[0].positions, vec!["C", "F-C"]);
    }
}
