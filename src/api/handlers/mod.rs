pub mod plot;

pub use plot::{get_spots, post_items};
