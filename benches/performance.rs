use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hoops::config::DisplayConfig;
use hoops::formatting::format_player_table;
use hoops::listing::{page_from_rows, EndOfResults};
use hoops::tui::action::Action;
use hoops::tui::component::Component;
use hoops::tui::components::App;
use hoops::tui::layout::{team_grid_cells, team_map_cells};
use hoops::tui::reducer::reduce;
use hoops::tui::renderer::Renderer;
use hoops::tui::state::AppState;
use hoops::tui::ViewKey;
use hoops::types::Player;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

const POSITIONS: [&str; 5] = ["G", "F", "C", "G-F", "F-C"];
const TEAM_CODES: [&str; 6] = ["BOS", "DEN", "LAL", "MIA", "OKC", "DAL"];

/// Create a page worth of sample players
fn create_sample_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player {
            id: i as i64 + 1,
            full_name: format!("Sample Player {}", i + 1),
            position: POSITIONS[i % POSITIONS.len()].to_string(),
            // every seventh player is unsigned
            team_name: (i % 7 != 0).then(|| TEAM_CODES[i % TEAM_CODES.len()].to_string()),
        })
        .collect()
}

/// State with a loaded search listing of 20 rows, content focused
fn create_search_state() -> AppState {
    let mut state = AppState::default();
    state = reduce(state, Action::GetStarted).0;
    state.ui.search.search_text = "sample".to_string();
    state.ui.search.rows = create_sample_players(20);
    state.ui.search.has_next_page = true;
    state.ui.search.loaded_once = true;
    state
}

/// Benchmark end-of-results detection on fetched windows
fn bench_page_from_rows(c: &mut Criterion) {
    let rows = create_sample_players(21);

    let mut group = c.benchmark_group("page_from_rows");

    group.bench_function("exact", |b| {
        b.iter(|| page_from_rows(black_box(rows.clone()), black_box(20), EndOfResults::Exact))
    });

    group.bench_function("full_page", |b| {
        b.iter(|| {
            page_from_rows(
                black_box(rows[..20].to_vec()),
                black_box(20),
                EndOfResults::FullPage,
            )
        })
    });

    group.finish();
}

/// Benchmark reducer action dispatch
fn bench_reducer_dispatch(c: &mut Criterion) {
    let state = create_search_state();

    let mut group = c.benchmark_group("reducer");

    group.bench_function("navigate_tab_right", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::NavigateTabRight),
            );
            new_state
        })
    });

    group.bench_function("select_next", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::SelectNext(ViewKey::Search)),
            );
            new_state
        })
    });

    group.bench_function("search_input", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::SearchInput(ViewKey::Search, 'x')),
            );
            new_state
        })
    });

    group.finish();
}

/// Benchmark team index geometry
fn bench_team_layout(c: &mut Criterion) {
    let content = Rect::new(0, 2, 120, 40);

    let mut group = c.benchmark_group("team_layout");

    group.bench_function("grid_cells", |b| b.iter(|| team_grid_cells(black_box(content))));
    group.bench_function("map_cells", |b| b.iter(|| team_map_cells(black_box(content))));

    group.finish();
}

/// Benchmark building and rendering a full frame
fn bench_rendering(c: &mut Criterion) {
    let state = create_search_state();
    let display = DisplayConfig::default();
    let area = Rect::new(0, 0, 120, 40);
    let players = create_sample_players(20);

    let mut group = c.benchmark_group("rendering");

    group.bench_function("search_frame", |b| {
        b.iter(|| {
            let element = App.view(black_box(&state), &());
            let mut buf = Buffer::empty(area);
            let mut renderer = Renderer::new();
            renderer.render(element, area, &mut buf, &display);
            buf
        })
    });

    group.bench_function("cli_player_table", |b| {
        b.iter(|| format_player_table(black_box(&players), &display))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_page_from_rows,
    bench_reducer_dispatch,
    bench_team_layout,
    bench_rendering
);
criterion_main!(benches);
