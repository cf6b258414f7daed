//! Lazy, pull-driven term streams with one-term lookahead.
//!
//! A [Stream] wraps a boxed [TermSource]. Sources are cloneable, so cloning a
//! stream yields an independent cursor that replays the same terms from the
//! current position. A single stream must only be advanced by one consumer;
//! the engines take their operands by value to enforce this.

use crate::error::{Error, Result};
use dyn_clone::DynClone;
use tracing::debug;

/// A fallible, cloneable producer of terms
pub trait TermSource<T>: Iterator<Item = Result<T>> + DynClone {}

impl<T, I> TermSource<T> for I where I: Iterator<Item = Result<T>> + DynClone {}

dyn_clone::clone_trait_object!(<T> TermSource<T>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// More terms may follow
    Live,
    /// The source signaled its end, which has not yet been handed out
    Exhausted,
    /// The end was handed out by [Stream::consume], further consumption is a misuse
    Closed,
}

#[derive(Clone)]
pub struct Stream<T> {
    source: Box<dyn TermSource<T>>,
    peeked: Option<T>,
    state: StreamState,
}

impl<T: Clone + 'static> Stream<T> {
    pub fn new<I>(source: I) -> Self
    where
        I: Iterator<Item = Result<T>> + Clone + 'static,
    {
        Stream {
            source: Box::new(source),
            peeked: None,
            state: StreamState::Live,
        }
    }

    /// Stream over a fixed list of terms
    pub fn from_terms(terms: Vec<T>) -> Self {
        Stream::new(terms.into_iter().map(Ok))
    }

    /// Stream with no terms at all
    pub fn empty() -> Self {
        Stream::from_terms(Vec::new())
    }
}

impl<T> Stream<T> {
    #[inline]
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// True once the source has signaled completion
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state != StreamState::Live
    }

    /// Pull from the source into the lookahead slot if it is empty
    fn fill(&mut self) -> Result<()> {
        if self.peeked.is_some() || self.state != StreamState::Live {
            return Ok(());
        }
        match self.source.next() {
            Some(Ok(term)) => self.peeked = Some(term),
            Some(Err(e)) => {
                debug!(error = %e, "term source failed, closing stream");
                self.state = StreamState::Closed;
                return Err(e);
            }
            None => {
                debug!("term source exhausted");
                self.state = StreamState::Exhausted;
            }
        }
        Ok(())
    }

    /// Look at the next term without advancing. Repeated calls return the
    /// same term and pull from the source at most once.
    pub fn peek(&mut self) -> Result<Option<&T>> {
        self.fill()?;
        Ok(self.peeked.as_ref())
    }

    /// Take the next term, advancing the source exactly once.
    ///
    /// The first `None` closes the stream; consuming a closed stream fails
    /// with [Error::ExhaustedStreamMisuse].
    pub fn consume(&mut self) -> Result<Option<T>> {
        if self.state == StreamState::Closed && self.peeked.is_none() {
            return Err(Error::ExhaustedStreamMisuse);
        }
        self.fill()?;
        match self.peeked.take() {
            Some(term) => Ok(Some(term)),
            None => {
                self.state = StreamState::Closed;
                Ok(None)
            }
        }
    }
}

impl<T> Iterator for Stream<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.state == StreamState::Closed && self.peeked.is_none() {
            return None;
        }
        self.consume().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_consume_test() {
        let mut s = Stream::from_terms(vec![1, 2]);
        assert_eq!(s.peek(), Ok(Some(&1)));
        assert_eq!(s.peek(), Ok(Some(&1)));
        assert_eq!(s.consume(), Ok(Some(1)));
        assert_eq!(s.consume(), Ok(Some(2)));
        assert!(!s.is_exhausted());
        assert_eq!(s.peek(), Ok(None));
        assert_eq!(s.state(), StreamState::Exhausted);
        assert!(s.is_exhausted());
        assert_eq!(s.consume(), Ok(None));
        assert_eq!(s.state(), StreamState::Closed);
        assert_eq!(s.consume(), Err(Error::ExhaustedStreamMisuse));
        assert_eq!(s.peek(), Ok(None));
    }

    #[test]
    fn source_advances_once_test() {
        use std::cell::Cell;
        use std::rc::Rc;

        let pulls = Rc::new(Cell::new(0));
        let counter = pulls.clone();
        let mut s = Stream::new((0..3).map(move |i| {
            counter.set(counter.get() + 1);
            Ok(i)
        }));
        for _ in 0..5 {
            s.peek().unwrap();
        }
        assert_eq!(pulls.get(), 1);
        s.consume().unwrap();
        assert_eq!(pulls.get(), 1);
        s.consume().unwrap();
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn clone_replays_test() {
        let mut s = Stream::from_terms(vec![3, 7, 15]);
        s.consume().unwrap();
        s.peek().unwrap();
        let replay = s.clone();
        assert_eq!(s.map(Result::unwrap).collect::<Vec<_>>(), vec![7, 15]);
        assert_eq!(replay.map(Result::unwrap).collect::<Vec<_>>(), vec![7, 15]);
    }

    #[test]
    fn error_closes_test() {
        let items: Vec<Result<i32>> = vec![Ok(1), Err(Error::DivisionByZero), Ok(2)];
        let mut s = Stream::new(items.into_iter());
        assert_eq!(s.consume(), Ok(Some(1)));
        assert_eq!(s.peek(), Err(Error::DivisionByZero));
        assert_eq!(s.state(), StreamState::Closed);
        assert_eq!(s.consume(), Err(Error::ExhaustedStreamMisuse));
        assert_eq!(s.next(), None);
    }
}
