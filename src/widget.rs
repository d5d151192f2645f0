pub mod stateful;

/*
    Widgets that can take input focus implement this, allowing a view to direct
    key/mouse input at whichever widget currently holds focus
 */
pub trait Focusable {
    fn focus(&mut self);
    fn unfocus(&mut self);
    fn is_focused(&self) -> bool;
}

// Colour::None means "use the terminal's default foreground"
#[derive(Clone)]
#[derive(Debug)]
#[derive(PartialEq)]
pub enum Colour {
    None,
    Red,
    Green,
    Blue,
    Cyan,
    Brown,
    White,
    Black
}

#[derive(Clone)]
#[derive(Debug)]
#[derive(PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical
}
