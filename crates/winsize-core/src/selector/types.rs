/// One entry of the window picker.
#[derive(Debug)]
pub struct Choice<W> {
    pub label: String,
    pub window: W,
}

/// What the user picked: the enumerated window itself plus the new size.
#[derive(Debug)]
pub struct Selection<W> {
    pub label: String,
    pub window: W,
    pub width: u32,
    pub height: u32,
}
