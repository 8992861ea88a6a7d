mod color_grid;
mod help_footer;
mod preference_list;
mod swatch;

pub use color_grid::render_color_grid_dialog;
pub use help_footer::render_help_footer;
pub use preference_list::render_preference_list;
pub use swatch::SwatchWidget;
