mod input_form;
mod options;
mod output;
mod top_bar;

pub use input_form::input_form;
pub use options::options_panel;
pub use output::output_region;
pub use top_bar::top_bar;
