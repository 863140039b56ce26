use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub function: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,     // Idle bars and tree nodes
    pub compare: Color, // Elements under comparison
    pub swap: Color,    // Elements being exchanged
    pub write: Color,   // Shifted or assigned slots
    pub mark: Color,    // Pivot, key or current candidate
    pub visited: Color, // Visited tree nodes
    pub path: Color,    // Tree edges already walked
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    bar: Color::Rgb(137, 180, 250),
    compare: Color::Rgb(249, 226, 175),
    swap: Color::Rgb(243, 139, 168),
    write: Color::Rgb(148, 226, 213),
    mark: Color::Rgb(245, 194, 231),
    visited: Color::Rgb(166, 227, 161),
    path: Color::Rgb(250, 179, 135),
};
