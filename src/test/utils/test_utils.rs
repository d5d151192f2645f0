use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use termion::event::Event;

use crate::input::EventInputResolver;

/*
    Feeds a scripted series of input events to a view instead of reading stdin
 */
pub struct MockEventInputResolver {
    events: RefCell<VecDeque<Event>>
}

pub fn build_mock_event_input_resolver(events: Vec<Event>) -> MockEventInputResolver {
    MockEventInputResolver { events: RefCell::new(VecDeque::from(events)) }
}

impl EventInputResolver for MockEventInputResolver {
    fn get_input_event(&self) -> Result<Event, io::Error> {
        match self.events.borrow_mut().pop_front() {
            Some(event) => {
                Ok(event)
            },
            None => {
                Err(io::Error::new(io::ErrorKind::UnexpectedEof, "No mocked input events remain"))
            }
        }
    }

    fn get_or_return_input_event(&self, input : Option<Event>) -> Result<Event, io::Error> {
        match input {
            Some(input_event) => {
                Ok(input_event)
            },
            _ => {
                self.get_input_event()
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
