use std::fmt::Display;

use ratatui::layout::Rect;
use ratatui::CompletedFrame;
use termion::event::{Event, Key, MouseButton, MouseEvent};

use crate::error::errors::ErrorWrapper;
use crate::input::{EventInputResolver, IoEventInputResolver};
use crate::terminal::terminal_manager::TerminalManager;
use crate::view::util::callback::Callback;
use crate::view::{GenericInputResult, InputHandler, InputResult, View};
use crate::widget::stateful::radio_group_widget::RadioGroupState;
use crate::widget::{Focusable, Orientation};

/*
    This view wires a radio group widget into the draw / input loop, i.e for a
    single choice such as:
    ( ) Red  (*) Green  ( ) Blue
    Arrow keys move the selection along the stacking axis, a left click selects
    the row under the cursor, q / Esc ends the view
 */
pub struct RadioGroupView<'a, B : ratatui::backend::Backend, T: Display + PartialEq + Clone> {
    pub terminal_manager : &'a mut TerminalManager<B>,
    pub state: RadioGroupState<T>,
    pub area: Rect,
    pub input_resolver: Box<dyn EventInputResolver>,
    callback: Option<Box<dyn FnMut(T) + 'a>>
}

pub fn build_radio_group_view<'a, B : ratatui::backend::Backend, T: Display + PartialEq + Clone>(terminal_manager: &'a mut TerminalManager<B>, state: RadioGroupState<T>, area: Rect) -> RadioGroupView<'a, B, T> {
    RadioGroupView { terminal_manager, state, area, input_resolver: Box::new(IoEventInputResolver {}), callback: None }
}

impl <'a, B : ratatui::backend::Backend, T: Display + PartialEq + Clone + 'a> Callback<'a, T> for RadioGroupView<'a, B, T> {
    fn set_callback(&mut self, c : Box<dyn FnMut(T) + 'a>) {
        self.callback = Some(c);
    }

    fn trigger_callback(&mut self, data: T) {
        if let Some(callback) = &mut self.callback {
            callback(data);
        }
    }
}

impl <'a, B : ratatui::backend::Backend, T: Display + PartialEq + Clone + 'a> View<T> for RadioGroupView<'a, B, T> {
    fn begin(&mut self) -> Result<InputResult<T>, ErrorWrapper> {
        self.state.focus();
        self.terminal_manager.clear_screen()?;
        self.draw(None)?;

        while !InputHandler::handle_input(self, None)?.generic_input_result.done {
            self.draw(None)?;
        }
        Ok(InputResult { generic_input_result: GenericInputResult { done: true, requires_view_refresh: true }, view_specific_result: Some(self.state.get_selection()) })
    }

    fn draw(&mut self, area: Option<Rect>) -> Result<CompletedFrame, ErrorWrapper> {
        if let Some(a) = area {
            self.area = a;
        }
        let widget_area = self.area;
        let state = &self.state;
        let terminal = &mut self.terminal_manager.terminal;
        Ok(terminal.draw(|frame| {
            frame.render_stateful_widget(state.clone(), widget_area, &mut state.clone());
        })?)
    }
}

impl <'a, B : ratatui::backend::Backend, T: Display + PartialEq + Clone + 'a> InputHandler<T> for RadioGroupView<'a, B, T> {
    fn handle_input(&mut self, input: Option<Event>) -> Result<InputResult<T>, ErrorWrapper> {
        let event = self.input_resolver.get_or_return_input_event(input)?;

        let mut done = false;
        let mut changed = None;
        match event {
            Event::Key(key) => {
                match key {
                    Key::Esc | Key::Char('q') => {
                        done = true;
                    },
                    Key::Down => {
                        if let Orientation::Vertical = self.state.get_orientation() {
                            changed = self.change_selection(|state| state.select_next());
                        }
                    },
                    Key::Up => {
                        if let Orientation::Vertical = self.state.get_orientation() {
                            changed = self.change_selection(|state| state.select_previous());
                        }
                    },
                    Key::Right => {
                        if let Orientation::Horizontal = self.state.get_orientation() {
                            changed = self.change_selection(|state| state.select_next());
                        }
                    },
                    Key::Left => {
                        if let Orientation::Horizontal = self.state.get_orientation() {
                            changed = self.change_selection(|state| state.select_previous());
                        }
                    },
                    _ => {}
                }
            },
            Event::Mouse(mouse_event) => {
                match mouse_event {
                    MouseEvent::Press(MouseButton::Left, x, y) => {
                        // termion mouse coordinates are 1-based
                        changed = self.state.handle_click(x.saturating_sub(1), y.saturating_sub(1), self.area);
                    },
                    _ => {}
                }
            },
            _ => {}
        }

        if let Some(choice) = changed {
            self.trigger_callback(choice);
        }
        Ok(InputResult { generic_input_result: GenericInputResult { done, requires_view_refresh: false }, view_specific_result: None })
    }
}

impl <B : ratatui::backend::Backend, T: Display + PartialEq + Clone> RadioGroupView<'_, B, T> {
    // Applies a selection movement and returns the new selection if it actually moved
    fn change_selection<F>(&mut self, movement: F) -> Option<T> where F : FnOnce(&mut RadioGroupState<T>) {
        let previous = self.state.get_selection();
        movement(&mut self.state);
        let selection = self.state.get_selection();
        if selection != previous {
            Some(selection)
        } else {
            None
        }
    }
}
