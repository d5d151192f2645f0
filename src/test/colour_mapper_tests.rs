#[cfg(test)]
mod colour_mapping {
    use ratatui::style::Color;

    use crate::terminal::colour_mapper::map_colour;
    use crate::widget::Colour;

    #[test]
    fn test_map_colour() {
        // GIVEN the supported mark colours
        // WHEN we map them to terminal colours
        // THEN we expect the matching ratatui colour for each
        assert_eq!(Color::Red, map_colour(Colour::Red));
        assert_eq!(Color::Green, map_colour(Colour::Green));
        assert_eq!(Color::Blue, map_colour(Colour::Blue));
        assert_eq!(Color::Cyan, map_colour(Colour::Cyan));
        assert_eq!(Color::Rgb(181, 137, 0), map_colour(Colour::Brown));
        assert_eq!(Color::White, map_colour(Colour::White));
        assert_eq!(Color::Black, map_colour(Colour::Black));
    }

    #[test]
    fn test_map_no_colour() {
        // GIVEN no colour override
        // WHEN we map it to a terminal colour
        // THEN we expect the terminal's default (Reset)
        assert_eq!(Color::Reset, map_colour(Colour::None));
    }
}
