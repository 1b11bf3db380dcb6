/// A strict weak ordering over `T`, resolved at compile time.
///
/// Only [`less`](Comparator::less) must be provided; the remaining relations
/// are derived from it. Two items `a` and `b` are *equivalent* when neither
/// orders before the other, and the set treats equivalent items as the same
/// item.
///
/// # Examples
///
/// ```
/// use pma::{Comparator, PmaSet};
///
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Descending;
///
/// impl Comparator<i32> for Descending {
///     fn less(&self, a: &i32, b: &i32) -> bool {
///         b < a
///     }
/// }
///
/// let mut set: PmaSet<i32, Descending> = PmaSet::with_comparator(Descending);
/// set.insert(1)?;
/// set.insert(3)?;
/// set.insert(2)?;
///
/// let items: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(items, [3, 2, 1]);
/// # Ok::<(), pma::PmaError>(())
/// ```
pub trait Comparator<T> {
    /// Returns true if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if `a` orders strictly after `b`.
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        self.less(b, a)
    }

    /// Returns true if neither item orders before the other.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    /// Returns true if `a` does not order strictly after `b`.
    #[inline]
    fn less_equal(&self, a: &T, b: &T) -> bool {
        !self.less(b, a)
    }
}

/// The comparator backing the default ordering: `T`'s own [`Ord`].
///
/// # Examples
///
/// ```
/// use pma::{Comparator, NaturalOrder};
///
/// assert!(NaturalOrder.less(&1, &2));
/// assert!(NaturalOrder.equivalent(&7, &7));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
