// DOM ids and classes expected in the host page
pub const CANVAS_ID: &str = "field-canvas";
pub const HEADLINE_ID: &str = "hero-headline";
pub const ENTRANCE_CLASS: &str = "revealed";
