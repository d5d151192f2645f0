use std::any::Any;
use std::io;

use termion::event::Event;
use termion::input::TermRead;

/*
    Resolves the next terminal input event (key press or mouse), allowing
    views to swap the stdin-backed resolver for a scripted one in tests
 */
pub trait EventInputResolver {
    fn get_input_event(&self) -> Result<Event, io::Error>;
    fn get_or_return_input_event(&self, input : Option<Event>) -> Result<Event, io::Error>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[derive(Clone)]
pub struct IoEventInputResolver {}

fn get_input_event() -> Result<Event, io::Error> {
    match io::stdin().events().next() {
        Some(event) => {
            event
        },
        None => {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "The terminal input event stream has ended"))
        }
    }
}

impl EventInputResolver for IoEventInputResolver {
    fn get_input_event(&self) -> Result<Event, io::Error> {
        Ok(get_input_event()?)
    }

    fn get_or_return_input_event(&self, input : Option<Event>) -> Result<Event, io::Error> {
        match input {
            Some(input_event) => {
                Ok(input_event)
            },
            _ => {
                Ok(get_input_event()?)
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
