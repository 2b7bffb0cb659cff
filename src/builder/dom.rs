use super::engine::ItemBounds;

/// Attribute the canvas view puts on every row (`"data-index"` in the
/// `CanvasItem` markup, which cannot take a constant as attribute name).
const INDEX_ATTR: &str = "data-index";

/// Client-space box of the canvas row at `index`, if it is mounted.
pub fn item_bounds(index: usize) -> Option<ItemBounds> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    let document = web_sys::window()?.document()?;
    let selector = format!("[{INDEX_ATTR}=\"{index}\"]");
    let element = document.query_selector(&selector).ok().flatten()?;
    let rect = element.get_bounding_client_rect();
    Some(ItemBounds::new(rect.top(), rect.height()))
}
