use std::fmt::Display;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::StatefulWidget;

use crate::terminal::colour_mapper;
use crate::widget::{Colour, Focusable, Orientation};

// The outer mark "( )" including the inner mark cell
const MARK_WIDTH: u16 = 3;
const LABEL_PADDING: u16 = 1;
// Gap between rows when stacked horizontally
const ROW_GAP: u16 = 2;

#[derive(Clone)]
#[derive(Debug)]
pub struct RadioGroupState<T: Display + PartialEq + Clone> {
    pub focused: bool,
    name: String,
    options: Vec<T>,
    selection: T,
    orientation: Orientation,
    unselected_mark_colour: Colour,
    selected_mark_colour: Colour
}

pub fn build_radio_group<T: Display + PartialEq + Clone>(name: String, options: Vec<T>, selection: T) -> RadioGroupState<T> {
    build_radio_group_with_orientation(name, options, selection, Orientation::Vertical)
}

pub fn build_radio_group_with_orientation<T: Display + PartialEq + Clone>(name: String, options: Vec<T>, selection: T, orientation: Orientation) -> RadioGroupState<T> {
    RadioGroupState { focused: false, name, options, selection, orientation, unselected_mark_colour: Colour::None, selected_mark_colour: Colour::None }
}

impl<T: Display + PartialEq + Clone> RadioGroupState<T> {
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_options(&self) -> &Vec<T> {
        &self.options
    }

    pub fn get_orientation(&self) -> Orientation {
        self.orientation.clone()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn set_unselected_mark_colour(&mut self, colour: Colour) {
        self.unselected_mark_colour = colour;
    }

    pub fn set_selected_mark_colour(&mut self, colour: Colour) {
        self.selected_mark_colour = colour;
    }

    pub fn get_selection(&self) -> T {
        self.selection.clone()
    }

    pub fn select(&mut self, input: T) {
        match self.options.iter().position(|o| *o == input) {
            Some(idx) => {
                log::info!("Selecting radio group {} row {} : {}", self.name, idx, self.options[idx]);
                self.selection = self.options[idx].clone();
            }, _ => {}
        }
    }

    pub fn select_next(&mut self) {
        match self.selection_index() {
            Some(idx) => {
                if idx < self.options.len() - 1 {
                    self.selection = self.options[idx + 1].clone();
                }
            },
            None => {
                // Nothing matches the current selection, fall back to the first option
                if !self.options.is_empty() {
                    self.selection = self.options[0].clone();
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.selection_index() {
            Some(idx) => {
                if idx > 0 {
                    self.selection = self.options[idx - 1].clone();
                }
            },
            None => {
                if !self.options.is_empty() {
                    self.selection = self.options[0].clone();
                }
            }
        }
    }

    /*
        Hit tests a terminal cell (0-based, same coordinate space as the render
        area) against the row layout. On a hit the row's option becomes the
        selection and is returned; misses change nothing
     */
    pub fn handle_click(&mut self, x: u16, y: u16, area: Rect) -> Option<T> {
        match self.row_at(x, y, area) {
            Some(idx) => {
                let choice = self.options[idx].clone();
                self.select(choice.clone());
                Some(choice)
            },
            None => {
                None
            }
        }
    }

    // Index of the first row matching the selection, None when the selection is not in the list
    fn selection_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.selection)
    }

    fn row_width(option: &T) -> u16 {
        MARK_WIDTH + LABEL_PADDING + format!("{}", option).chars().count() as u16
    }

    fn row_at(&self, x: u16, y: u16, area: Rect) -> Option<usize> {
        match self.orientation {
            Orientation::Vertical => {
                if x < area.left() || y < area.top() || y >= area.bottom() {
                    return None;
                }
                let index = (y - area.top()) as usize;
                if index >= self.options.len() {
                    return None;
                }
                let row_width = Self::row_width(&self.options[index]);
                if x < area.left() + row_width {
                    Some(index)
                } else {
                    None
                }
            },
            Orientation::Horizontal => {
                if y != area.top() {
                    return None;
                }
                let mut row_start = area.left();
                for (index, option) in self.options.iter().enumerate() {
                    let row_width = Self::row_width(option);
                    // Rows clipped from the render are not tappable either
                    if row_start + row_width > area.right() {
                        return None;
                    }
                    if x >= row_start && x < row_start + row_width {
                        return Some(index);
                    }
                    row_start += row_width + ROW_GAP;
                }
                None
            }
        }
    }
}

impl<T: Display + PartialEq + Clone> Focusable for RadioGroupState<T> {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn unfocus(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl<T: Display + PartialEq + Clone> StatefulWidget for RadioGroupState<T> {
    type State = RadioGroupState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, _state: &mut Self::State) {
        let unselected_style = Style::default().fg(colour_mapper::map_colour(self.unselected_mark_colour.clone()));
        let selected_style = Style::default().fg(colour_mapper::map_colour(self.selected_mark_colour.clone()));

        let mut x = area.left();
        let mut y = area.top();
        for option in self.options.iter() {
            let row_width = Self::row_width(option);
            match self.orientation {
                Orientation::Vertical => {
                    if y >= area.bottom() {
                        break;
                    }
                },
                Orientation::Horizontal => {
                    if x + row_width > area.right() {
                        break;
                    }
                }
            }

            let highlighted = *option == self.selection;
            buf.set_string(x, y, "( )", unselected_style);
            if highlighted {
                buf.set_string(x + 1, y, "*", selected_style);
            }

            let mut label_style = Style::default();
            if self.focused && highlighted {
                label_style = label_style.add_modifier(Modifier::REVERSED);
            }
            buf.set_string(x + MARK_WIDTH + LABEL_PADDING, y, format!("{}", option), label_style);

            match self.orientation {
                Orientation::Vertical => {
                    y += 1;
                },
                Orientation::Horizontal => {
                    x += row_width + ROW_GAP;
                }
            }
        }
    }
}
