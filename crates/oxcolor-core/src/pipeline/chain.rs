//! Filter composition
//!
//! A [`Chain`] resolves each element to a whole-triple function once, when
//! the element is added. Evaluation then only threads the triple through the
//! cached functions left to right. The triple's kind may change between
//! stages (e.g. after [`xyz_to_yxy`](super::xyz_to_yxy)); each stage sees
//! whatever kind the previous one produced.

use tracing::trace;

use super::filter::{Filter, SingleFilter, TripleFilter, TripleFn};
use crate::Result;
use crate::color::Triple;

/// Ordered composition of filters
#[derive(Clone, Default)]
pub struct Chain {
    stages: Vec<TripleFn>,
}

impl Chain {
    /// Build a chain from filter-like elements, resolving each once
    pub fn new<I>(filters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Filter>,
    {
        let stages: Vec<TripleFn> = filters
            .into_iter()
            .map(|f| f.into().resolve())
            .collect();
        trace!(stages = stages.len(), "resolved filter chain");
        Self { stages }
    }

    /// Append one element
    pub fn then(mut self, filter: impl Into<Filter>) -> Self {
        self.stages.push(filter.into().resolve());
        self
    }

    /// Number of resolved stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True for the empty (identity) chain
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Evaluate the chain on one triple
    #[inline]
    pub fn apply(&self, input: Triple) -> Result<Triple> {
        self.stages.iter().try_fold(input, |acc, stage| stage(acc))
    }

    /// The chain as a single whole-triple filter
    pub fn filter(&self) -> TripleFilter {
        let chain = self.clone();
        TripleFilter::new(move |t| chain.apply(t))
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl From<Chain> for Filter {
    fn from(chain: Chain) -> Self {
        Filter::Triple(chain.filter())
    }
}

impl From<Chain> for TripleFilter {
    fn from(chain: Chain) -> Self {
        chain.filter()
    }
}

/// Compose single-channel filters into one, resolving each once
pub fn chain_single<I>(filters: I) -> SingleFilter
where
    I: IntoIterator<Item = SingleFilter>,
{
    let stages: Vec<_> = filters.into_iter().map(|f| f.function()).collect();
    SingleFilter::new(move |v| stages.iter().fold(v, |acc, f| f(acc)))
}

/// Three single-channel filters applied positionally
///
/// The first filter goes to channel a, the second to b, the third to c,
/// whatever those channels mean for the triple's kind.
#[derive(Debug, Clone)]
pub struct Multiplex {
    a: SingleFilter,
    b: SingleFilter,
    c: SingleFilter,
}

impl Multiplex {
    /// Combine three per-channel filters
    pub fn new(a: SingleFilter, b: SingleFilter, c: SingleFilter) -> Self {
        Self { a, b, c }
    }

    /// Whole-triple filter form
    pub fn filter(&self) -> TripleFilter {
        let (fa, fb, fc) = (self.a.function(), self.b.function(), self.c.function());
        TripleFilter::new(move |t| {
            let (a, b, c) = t.decompose();
            Ok(t.make_like(fa(a), fb(b), fc(c)))
        })
    }
}

impl From<Multiplex> for Filter {
    fn from(m: Multiplex) -> Self {
        Filter::Triple(m.filter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorKind, Xyz, Yxy};
    use crate::pipeline::{identity, invert, xyz_to_yxy, yxy_to_xyz};
    use crate::Error;

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = Chain::default();
        let input = Triple::Xyz(Xyz::new(0.3, 0.2, 0.1));
        assert!(chain.is_empty());
        assert_eq!(chain.apply(input).unwrap(), input);
    }

    #[test]
    fn test_left_to_right_order() {
        let chain = Chain::default()
            .then(Filter::single(|v| v + 1.0))
            .then(Filter::single(|v| v * 2.0));
        let out = chain.apply(Triple::Xyz(Xyz::new(0.0, 1.0, 2.0))).unwrap();
        assert_eq!(out, Triple::Xyz(Xyz::new(2.0, 4.0, 6.0)));
    }

    #[test]
    fn test_mixed_shapes_and_kind_change() {
        let chain = Chain::new([Filter::from(invert()), Filter::from(xyz_to_yxy())]);
        assert_eq!(chain.len(), 2);
        let out = chain.apply(Triple::Xyz(Xyz::new(0.8, 0.6, 0.2))).unwrap();
        assert_eq!(out.kind(), ColorKind::Yxy);
        assert!(out.approx_eq(&Triple::Yxy(Yxy::new(0.4, 0.2 / 1.4, 0.4 / 1.4)), 1e-12));
    }

    #[test]
    fn test_downstream_rejects_changed_kind() {
        let chain = Chain::new([xyz_to_yxy(), xyz_to_yxy()]);
        let err = chain.apply(Triple::Xyz(Xyz::new(0.2, 0.4, 0.8))).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedColorKind {
                kind: ColorKind::Yxy,
                ..
            }
        ));
    }

    #[test]
    fn test_nested_chain() {
        let inner = Chain::new([xyz_to_yxy(), yxy_to_xyz()]);
        let outer = Chain::new([Filter::from(inner), Filter::from(identity())]);
        let input = Triple::Xyz(Xyz::new(0.2, 0.4, 0.8));
        assert!(outer.apply(input).unwrap().approx_eq(&input, 1e-12));
    }

    #[test]
    fn test_multiplex_positional() {
        let m = Multiplex::new(invert(), identity(), invert());
        let out = Filter::from(m)
            .apply(Triple::Xyz(Xyz::new(0.2, 0.4, 0.4)))
            .unwrap();
        assert!(out.approx_eq(&Triple::Xyz(Xyz::new(0.8, 0.4, 0.6)), 1e-12));
    }

    #[test]
    fn test_chain_single() {
        let f = chain_single([
            SingleFilter::new(|v| v * 10.0),
            SingleFilter::new(|v| v - 1.0),
        ]);
        assert_eq!(f.eval(0.5), 4.0);
        assert_eq!(chain_single(Vec::<SingleFilter>::new()).eval(0.25), 0.25);
    }
}
