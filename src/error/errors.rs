use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;

pub struct GenericError {
    message: String
}

impl Debug for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for GenericError {

}

impl GenericError {
    pub fn new(message: String) -> GenericError {
        GenericError { message }
    }
}

pub enum ErrorWrapper {
    Io(io::Error),
    Generic(GenericError)
}

impl ErrorWrapper {
    pub fn new_generic_error(message: String) -> ErrorWrapper {
        ErrorWrapper::Generic(GenericError::new(message))
    }
}

impl Debug for ErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorWrapper::Io(e) => {
                write!(f, "{}", e)
            },
            ErrorWrapper::Generic(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl Display for ErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorWrapper::Io(e) => {
                write!(f, "{}", e)
            },
            ErrorWrapper::Generic(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl Error for ErrorWrapper {

}

impl From<io::Error> for ErrorWrapper {
    fn from(error: io::Error) -> ErrorWrapper {
        ErrorWrapper::Io(error)
    }
}
