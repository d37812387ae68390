pub mod details;
pub mod list_view;
pub mod navigation;
pub mod pickers;

pub use details::reduce_details;
pub use list_view::reduce_list_view;
pub use navigation::reduce_navigation;
pub use pickers::reduce_pickers;
