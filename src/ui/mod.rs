pub mod pipe;
pub mod plot;
pub mod styles;

pub use plot::render_scatter;
