use crate::error::ViewError;
use crate::listing::{ListFocus, PlayerPage};
use crate::types::{Player, SeasonStats};

use super::types::{Tab, ViewKey};

/// Global actions - like Redux actions
///
/// These represent all possible state changes in the application.
/// Actions are dispatched from keys, mouse clicks and completed effects,
/// and are processed by the reducer to produce new state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation actions
    NavigateTab(Tab),
    NavigateTabLeft,
    NavigateTabRight,
    EnterContentFocus,
    ExitContentFocus,
    /// The "GET STARTED" link on the home tab
    GetStarted,

    // List view actions
    SearchInput(ViewKey, char),
    SearchBackspace(ViewKey),
    SubmitSearch(ViewKey),
    NextPage(ViewKey),
    PreviousPage(ViewKey),
    SelectNext(ViewKey),
    SelectPrevious(ViewKey),
    SetListFocus(ViewKey, ListFocus),
    /// Open details for the selected row
    OpenSelected(ViewKey),
    /// Select a row and open its details (mouse click)
    OpenRow(ViewKey, usize),
    /// Leave a position/team listing and return to its index
    CloseListing(ViewKey),

    // Details overlay
    OpenDetails(Player),
    CloseDetails,

    // Index pickers
    SelectCategory(usize),
    OpenCategory(String),
    SelectTeam(usize),
    OpenTeam(String),
    ToggleTeamLayout,

    // Effect results
    PageLoaded {
        view: ViewKey,
        token: u64,
        result: Result<PlayerPage, ViewError>,
    },
    DetailsLoaded {
        token: u64,
        result: Result<SeasonStats, ViewError>,
    },

    // System
    SetStatusMessage { message: String, is_error: bool },
    Quit,
}
