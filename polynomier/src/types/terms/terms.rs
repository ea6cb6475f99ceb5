use std::collections::HashMap;
use std::fmt::{Display, Debug};
use std::ops::{Add, Sub, Mul, Neg, AddAssign, SubAssign, MulAssign};
use auto_impl_ops::auto_ops;
use itertools::Itertools;
use num_traits::Zero;
use crate::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Ring, RingOps};
use super::Gen;

type Hasher = ahash::RandomState;

// A term mapping `X -> R`. No entry ever holds a zero coefficient once an
// operation has returned.

#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "X: serde::Serialize, R: serde::Serialize",
    deserialize = "X: serde::Deserialize<'de>, R: serde::Deserialize<'de>"
)))]
pub struct Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{ 
    // keys are not strings, so the map goes out as a list of pairs.
    #[cfg_attr(feature = "serde", serde(with = "serde_with::As::<Vec<(serde_with::Same, serde_with::Same)>>"))]
    data: HashMap<X, R, Hasher>,
    #[cfg_attr(feature = "serde", serde(skip))]
    r_zero: R
}

impl<X, R> Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{ 
    pub fn new() -> Self {
        let hasher = Hasher::with_seeds(0, 0, 0, 0);
        let data = HashMap::with_hasher(hasher);
        let r_zero = R::zero();
        Self { data, r_zero }
    }

    pub fn clean(&mut self) { 
        self.data.retain(|_, r| !r.is_zero());
    }

    pub fn nterms(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, x: &X) -> bool { 
        self.data.contains_key(x)
    }

    pub fn coeff(&self, x: &X) -> &R { 
        self.data.get(x).unwrap_or(&self.r_zero)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&X, &R)> {
        self.data.iter()
    }

    pub fn map<Y, S, F>(&self, f: F) -> Terms<Y, S>
    where 
        Y: Gen, 
        S: Ring, for<'x> &'x S: RingOps<S>,
        F: Fn(&X, &R) -> (Y, S) 
    { 
        self.iter().map(|(x, r)| f(x, r)).collect()
    }

    pub fn map_coeffs<S, F>(&self, f: F) -> Terms<X, S>
    where 
        S: Ring, for<'x> &'x S: RingOps<S>, 
        F: Fn(&R) -> S 
    { 
        self.map(|x, r| (x.clone(), f(r)))
    }

    // must clean after call
    pub fn add_pair(&mut self, (x, r): (X, R)) { 
        if r.is_zero() { return }

        if let Some(v) = self.data.get_mut(&x) { 
            v.add_assign(r);
        } else { 
            self.data.insert(x, r);
        }
    } 

    // must clean after call
    pub fn add_pair_ref(&mut self, (x, r): (&X, &R)) { 
        if r.is_zero() { return }

        if let Some(v) = self.data.get_mut(x) { 
            v.add_assign(r);
        } else { 
            self.data.insert(x.clone(), r.clone());
        }
    }

    pub fn remove(&mut self, x: &X) -> Option<R> { 
        self.data.remove(x)
    }

    /// Terms sorted by `cmp` on the keys.
    pub fn sort_terms_by<F>(&self, cmp: F) -> impl Iterator<Item = (&X, &R)>
    where F: Fn(&X, &X) -> std::cmp::Ordering { 
        self.iter().sorted_by(|(x, _), (y, _)| cmp(*x, *y))
    }
}

// Term algebra. All of these leave their inputs untouched.

pub fn add<X, R>(a: &Terms<X, R>, b: &Terms<X, R>) -> Terms<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> { 
    let mut res = a.clone();
    for t in b.iter() { 
        res.add_pair_ref(t);
    }
    res.clean();
    res
}

pub fn mul_scalar<X, R>(a: &Terms<X, R>, r: &R) -> Terms<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> { 
    if r.is_one() { 
        return a.clone()
    }
    a.iter().map(|(x, s)| (x.clone(), s * r)).collect()
}

pub fn sub<X, R>(a: &Terms<X, R>, b: &Terms<X, R>) -> Terms<X, R>
where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> { 
    add(a, &mul_scalar(b, &-R::one()))
}

// Convolution over the monomial lattice, O(|a| |b|).
pub fn mul<X, R>(a: &Terms<X, R>, b: &Terms<X, R>) -> Terms<X, R>
where X: Gen + Mul<Output = X>, R: Ring, for<'x> &'x R: RingOps<R> { 
    let mut res = Terms::new();
    res.data.reserve(a.nterms() * b.nterms());

    for (x, r) in a.iter() { 
        for (y, s) in b.iter() { 
            let xy = x.clone() * y.clone();
            let rs = r * s;
            res.add_pair((xy, rs));
        }
    }
    
    res.clean();
    res
}

impl<X, R> Default for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<X, R> From<(X, R)> for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(value: (X, R)) -> Self {
        Self::from_iter([value])
    }
}

impl<X, R> From<HashMap<X, R>> for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(value: HashMap<X, R>) -> Self {
        Self::from_iter(value)
    }
}

impl<X, R> FromIterator<(X, R)> for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from_iter<T: IntoIterator<Item = (X, R)>>(iter: T) -> Self {
        let mut res = Self::new();
        for e in iter.into_iter() { 
            res.add_pair(e);
        }
        res.clean();
        res
    }
}

impl<X, R> IntoIterator for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Item = (X, R);
    type IntoIter = std::collections::hash_map::IntoIter<X, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

// Structural dump: `{key: coeff, ...}`, keys in ascending order.
impl<X, R> Display for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.sort_terms_by(Ord::cmp).map(|(x, r)| 
            format!("{x:?}: {r}")
        ).join(", ");
        write!(f, "{{{entries}}}")
    }
}

impl<X, R> Debug for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<X, R> Zero for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<X, R> Neg for &Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Terms<X, R>;

    fn neg(self) -> Self::Output {
        self.map_coeffs(|r| -r)
    }
}

impl<X, R> Neg for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[auto_ops]
impl<X, R> AddAssign<&Terms<X, R>> for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn add_assign(&mut self, rhs: &Self) {
        for t in rhs.iter() { 
            self.add_pair_ref(t);
        }
        self.clean()
    }
}

#[auto_ops]
impl<X, R> SubAssign<&Terms<X, R>> for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn sub_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.iter() { 
            self.add_pair_ref((x, &-r));
        }
        self.clean()
    }
}

#[auto_ops]
impl<X, R> MulAssign<&R> for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn mul_assign(&mut self, rhs: &R) {
        *self = mul_scalar(self, rhs)
    }
}

#[auto_ops]
impl<X, R> Mul for &Terms<X, R>
where 
    X: Gen + Mul<Output = X>,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Terms<X, R>;

    fn mul(self, rhs: Self) -> Self::Output {
        mul(self, rhs)
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<X, R> $trait<Self> for Terms<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<X, R> $trait<Terms<X, R>> for &Terms<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);

impl<X, R> Elem for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn math_symbol() -> String {
        format!("{}<{}>", R::math_symbol(), X::math_symbol())
    }
}

impl<X, R> AddMon for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> AddGrp for Terms<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}
