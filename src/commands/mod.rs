pub mod player;
pub mod position;
pub mod search;
pub mod team;
pub mod teams;

use anyhow::{Context, Result};

use crate::config::{Config, DisplayConfig};
use crate::data_provider::StatsDataProvider;
use crate::formatting::{format_header, format_player_table};
use crate::listing::{fetch_page, ListFilter, PageRequest, PlayerPage};
use crate::tui::components::player_table::EMPTY_PAGE;

/// Build the request for one page of a listing using the configured sizes
pub fn listing_request(filter: ListFilter, search_text: &str, page: usize, config: &Config) -> PageRequest {
    let pagination = &config.pagination;
    let page_size = match filter {
        ListFilter::Search => pagination.search_page_size,
        ListFilter::Position(_) => pagination.position_page_size,
        ListFilter::Team(_) => pagination.team_page_size,
    };
    PageRequest {
        filter,
        search_text: search_text.to_string(),
        page: page.max(1),
        page_size: page_size.max(1),
        end_detection: config.end_detection(),
    }
}

/// Fetch one page, attaching what was asked for to any error
pub async fn fetch_listing(provider: &dyn StatsDataProvider, request: &PageRequest) -> Result<PlayerPage> {
    fetch_page(provider, request)
        .await
        .with_context(|| format!("Failed to load page {} of {}", request.page, request.filter.title()))
}

/// Title, player table and a pager hint
pub fn format_listing(title: &str, page_number: usize, page: &PlayerPage, display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(title, true, display));
    output.push('\n');

    if page.rows.is_empty() {
        output.push_str(EMPTY_PAGE);
        output.push('\n');
    } else {
        output.push_str(&format_player_table(&page.rows, display));
    }

    output.push('\n');
    output.push_str(&format!("Page {}", page_number));
    if page.has_next_page {
        output.push_str(&format!(" (more: --page {})", page_number + 1));
    }
    output.push('\n');
    output
}
