/// Monokai palette for page chrome and the `hl-` scope classes.
///
/// Both front ends embed this exact text; it is never edited at runtime.
pub const STYLESHEET: &str = include_str!("../../../../assets/monokai.css");
