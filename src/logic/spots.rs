use crate::{
    error::{PlotError, Result},
    models::plot::PLACEHOLDER_ITEM,
};

/// Largest number of spots a single `Vec<String>` can hold.
pub const MAX_SPOTS: usize = isize::MAX as usize / std::mem::size_of::<String>();

/// Rounds `width * height` up to a whole number of spots.
/// A non-positive area yields zero spots; a non-finite area, or one with more
/// spots than `MAX_SPOTS`, is an error.
pub fn spot_count(width: f64, height: f64) -> Result<usize> {
    let area = width * height;
    if !area.is_finite() {
        log::warn!("Rejecting non-finite plot area {area} ({width} x {height})");
        return Err(PlotError::InvalidSpotCount { width, height });
    }

    let spots = area.ceil();
    if spots <= 0.0 {
        return Ok(0);
    }
    // `as` saturates, so the integer comparison also catches areas beyond usize.
    let count = spots as usize;
    if count > MAX_SPOTS {
        log::warn!("Plot area {area} exceeds the countable range");
        return Err(PlotError::InvalidSpotCount { width, height });
    }

    log::debug!("{width} x {height} → {count} spot(s)");
    Ok(count)
}

/// Fills `count` spots with the placeholder item.
pub fn fill_spots(count: usize) -> Vec<String> {
    vec![PLACEHOLDER_ITEM.to_string(); count]
}
