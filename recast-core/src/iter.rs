//! Lazy casting iterator adapters.
//!
//! Both adapters pull one raw element at a time from the underlying
//! iterator, apply the caster, and hand control back to the consumer after
//! each element. They hold no buffered elements, so dropping them early is
//! safe and leaks nothing.

use std::iter::FusedIterator;

use crate::{
    caster::Caster,
    error::{CastError, CastFailure},
};

/// Lazily casts each element of an underlying iterator, stopping at the
/// first failure.
///
/// Returned by [`Caster::cast_iter`]. Each successfully cast element is
/// yielded as `Ok`, in input order. The first failure is yielded as an `Err`
/// carrying the raw element, its zero-based index, and the reason, after
/// which the iterator is exhausted; elements pulled before the failure
/// remain with the caller.
#[derive(Debug, Clone)]
pub struct CastIter<I, C> {
    elements: I,
    caster: C,
    index: usize,
    done: bool,
}

impl<I, C> CastIter<I, C> {
    pub(crate) fn new(elements: I, caster: C) -> Self {
        Self {
            elements,
            caster,
            index: 0,
            done: false,
        }
    }
}

impl<V, I, C> Iterator for CastIter<I, C>
where
    I: Iterator<Item = V>,
    C: Caster<V>,
{
    type Item = Result<C::Output, CastFailure<V>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(element) = self.elements.next() else {
            self.done = true;
            return None;
        };
        let index = self.index;
        self.index += 1;
        match self.caster.cast(&element) {
            Ok(output) => Some(Ok(output)),
            Err(reason) => {
                self.done = true;
                Some(Err(CastFailure {
                    element,
                    index,
                    reason,
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // A failure can cut the pass short, so only the upper bound carries over.
        (0, self.elements.size_hint().1)
    }
}

impl<V, I, C> FusedIterator for CastIter<I, C>
where
    I: Iterator<Item = V>,
    C: Caster<V>,
{
}

/// Lazily casts each element of an underlying iterator, reporting failures
/// to a handler and skipping the failed elements.
///
/// Returned by [`Caster::cast_iter_with`]. The handler receives the raw
/// element by value, its zero-based index in the input, and the reason the
/// cast was rejected; iteration then continues with the next element. The
/// handler is invoked exactly once per failing element, in input order.
pub struct CastIterWith<I, C, F> {
    elements: I,
    caster: C,
    on_error: F,
    index: usize,
}

impl<I, C, F> CastIterWith<I, C, F> {
    pub(crate) fn new(elements: I, caster: C, on_error: F) -> Self {
        Self {
            elements,
            caster,
            on_error,
            index: 0,
        }
    }
}

impl<V, I, C, F> Iterator for CastIterWith<I, C, F>
where
    I: Iterator<Item = V>,
    C: Caster<V>,
    F: FnMut(V, usize, CastError),
{
    type Item = C::Output;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = self.elements.next()?;
            let index = self.index;
            self.index += 1;
            match self.caster.cast(&element) {
                Ok(output) => return Some(output),
                Err(reason) => (self.on_error)(element, index, reason),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Any element may be skipped, so only the upper bound carries over.
        (0, self.elements.size_hint().1)
    }
}
