use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ViewControllerError<E> {
    Surface(E),
}

impl<E: Error> fmt::Display for ViewControllerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for ViewControllerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
        }
    }
}
