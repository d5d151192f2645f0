use ratatui::layout::Rect;
use ratatui::CompletedFrame;
use termion::event::Event;

use crate::error::errors::ErrorWrapper;

pub mod radio_group_view;
pub mod util;

/*
    Views own the draw / input loop for a widget embedded in a terminal,
    begin() runs until the view is done and returns the view specific result
 */
pub trait View<T> {
    fn begin(&mut self) -> Result<InputResult<T>, ErrorWrapper>;
    fn draw(&mut self, area: Option<Rect>) -> Result<CompletedFrame, ErrorWrapper>;
}

pub trait InputHandler<T> {
    fn handle_input(&mut self, input: Option<Event>) -> Result<InputResult<T>, ErrorWrapper>;
}

pub struct GenericInputResult {
    pub done: bool,
    pub requires_view_refresh: bool
}

pub struct InputResult<T> {
    pub generic_input_result: GenericInputResult,
    pub view_specific_result: Option<T>
}
