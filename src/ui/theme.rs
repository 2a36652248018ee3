use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub mark_x: Color,    // Blue, the first player
    pub mark_o: Color,    // Orange, the second player
    pub winner_bg: Color, // Background for the three winning cells
    pub cursor_bg: Color, // Background for the board cursor cell
    pub selected: Color,  // The viewed entry in the move list
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),            // Slightly lighter BG for the status bar
    mark_x: Color::Rgb(137, 180, 250),
    mark_o: Color::Rgb(250, 179, 135),
    winner_bg: Color::Rgb(64, 90, 64),   // Dim green behind a completed line
    cursor_bg: Color::Rgb(69, 71, 90),   // Grey-blue behind the cursor cell
    selected: Color::Rgb(249, 226, 175), // Yellow for the viewed history entry
};
