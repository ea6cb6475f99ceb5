use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Debug};
use std::ops::{Mul, MulAssign};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::Itertools;
use num_traits::One;

use crate::{Elem, Gen};
use crate::util::format::fmt_pow;
use super::{Mono, MonoOrd};

/// A product of named variables `Πx_i^{d_i}`, stored as `{ symbol => exponent }`. 
/// Exponents are always positive; an absent variable has exponent 0 and the 
/// empty monomial is `1`.
#[derive(Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<String, usize>", into = "BTreeMap<String, usize>"))]
pub struct Monomial { 
    data: BTreeMap<String, usize>
}

impl Monomial {
    pub fn var<S>(x: S) -> Self
    where S: Into<String> { 
        Self::from_iter([(x, 1)])
    }

    delegate! { 
        to self.data { 
            #[call(len)]
            pub fn nvars(&self) -> usize;
            pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)>;
        }
    }

    pub fn vars(&self) -> impl Iterator<Item = &String> { 
        self.data.keys()
    }

    pub fn contains(&self, x: &str) -> bool { 
        self.data.contains_key(x)
    }

    pub fn deg_for(&self, x: &str) -> usize { 
        self.data.get(x).cloned().unwrap_or(0)
    }

    /// The monomial with `x` removed, i.e. with `x^0`.
    pub fn without(&self, x: &str) -> Self { 
        let mut data = self.data.clone();
        data.remove(x);
        Self { data }
    }

    /// `self / x`, or `None` if `x` does not occur in `self`.
    pub fn lower(&self, x: &str) -> Option<Self> { 
        let d = self.deg_for(x);
        if d == 0 { 
            return None
        }
        let mut res = self.without(x);
        if d > 1 { 
            res.data.insert(x.to_string(), d - 1);
        }
        Some(res)
    }
}

impl<S> FromIterator<(S, usize)> for Monomial
where S: Into<String> {
    fn from_iter<T: IntoIterator<Item = (S, usize)>>(iter: T) -> Self {
        let mut data = BTreeMap::new();
        for (x, d) in iter { 
            if d > 0 { 
                *data.entry(x.into()).or_insert(0) += d;
            }
        }
        Self { data }
    }
}

impl From<BTreeMap<String, usize>> for Monomial {
    fn from(data: BTreeMap<String, usize>) -> Self {
        Self::from_iter(data)
    }
}

impl From<Monomial> for BTreeMap<String, usize> {
    fn from(m: Monomial) -> Self {
        m.data
    }
}

impl One for Monomial {
    fn one() -> Self {
        Self::default()
    }

    fn is_one(&self) -> bool { 
        self.data.is_empty()
    }
}

#[auto_ops]
impl MulAssign<&Monomial> for Monomial {
    fn mul_assign(&mut self, rhs: &Monomial) {
        for (x, d) in rhs.data.iter() { 
            *self.data.entry(x.clone()).or_insert(0) += d;
        }
    }
}

impl MonoOrd for Monomial {
    // x > y > z > ...
    fn cmp_lex(&self, other: &Self) -> Ordering {
        let vars = self.vars().chain(other.vars()).sorted().dedup();
        for x in vars { 
            let c = self.deg_for(x).cmp(&other.deg_for(x));
            if c.is_ne() { 
                return c
            }
        }
        Ordering::Equal
    }

    fn cmp_grlex(&self, other: &Self) -> Ordering {
        self.total_deg().cmp(&other.total_deg()).then_with(|| 
            self.cmp_lex(other)
        )
    }
}

impl Mono for Monomial { 
    fn total_deg(&self) -> usize {
        self.data.values().sum()
    }

    fn divides(&self, other: &Self) -> bool {
        self.iter().all(|(x, &d)| d <= other.deg_for(x))
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one() { 
            return f.write_str("1")
        }
        let s = self.iter().map(|(x, &d)| fmt_pow(x, d)).join("");
        f.write_str(&s)
    }
}

impl Debug for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.iter().map(|(x, d)| format!("{x}: {d}")).join(", ");
        write!(f, "{{{s}}}")
    }
}

impl Elem for Monomial { 
    fn math_symbol() -> String {
        String::from("M")
    }
}

impl Gen for Monomial {}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(d: &[(&str, usize)]) -> Monomial { 
        Monomial::from_iter(d.iter().cloned())
    }

    #[test]
    fn init() { 
        let a = m(&[("y", 1), ("x", 2), ("z", 0)]);
        assert_eq!(a.nvars(), 2);
        assert_eq!(a.deg_for("x"), 2);
        assert_eq!(a.deg_for("y"), 1);
        assert_eq!(a.deg_for("z"), 0);
        assert!(!a.contains("z"));
        assert_eq!(a.total_deg(), 3);
    }

    #[test]
    fn eq_by_value() { 
        assert_eq!(m(&[("x", 2), ("y", 1)]), m(&[("y", 1), ("x", 2)]));
        assert_eq!(m(&[("x", 0)]), Monomial::one());
        assert_ne!(m(&[("x", 1)]), m(&[("y", 1)]));
    }

    #[test]
    fn mul() { 
        let a = m(&[("x", 2), ("y", 1)]);
        let b = m(&[("y", 2), ("z", 1)]);
        assert_eq!(&a * &b, m(&[("x", 2), ("y", 3), ("z", 1)]));
        assert_eq!(a.clone() * Monomial::one(), a);
    }

    #[test]
    fn without_and_lower() { 
        let a = m(&[("x", 2), ("y", 1)]);
        assert_eq!(a.without("x"), m(&[("y", 1)]));
        assert_eq!(a.without("z"), a);
        assert_eq!(a.lower("x"), Some(m(&[("x", 1), ("y", 1)])));
        assert_eq!(a.lower("y"), Some(m(&[("x", 2)])));
        assert_eq!(a.lower("z"), None);
    }

    #[test]
    fn divides() { 
        let a = m(&[("x", 1)]);
        let b = m(&[("x", 2), ("y", 1)]);
        assert!(a.divides(&b));
        assert!(!b.divides(&a));
        assert!(Monomial::one().divides(&a));
    }

    #[test]
    fn ord() { 
        let x2 = m(&[("x", 2)]);
        let xy = m(&[("x", 1), ("y", 1)]);
        let y3 = m(&[("y", 3)]);

        assert_eq!(x2.cmp_lex(&xy), Ordering::Greater);
        assert_eq!(xy.cmp_lex(&y3), Ordering::Greater);
        assert_eq!(x2.cmp_grlex(&y3), Ordering::Less);
        assert_eq!(x2.cmp_grlex(&xy), Ordering::Greater);
        assert_eq!(x2.cmp_grlex(&x2), Ordering::Equal);
    }

    #[test]
    fn display() { 
        assert_eq!(Monomial::one().to_string(), "1");
        assert_eq!(Monomial::var("x").to_string(), "x");
        assert_eq!(m(&[("y", 1), ("x", 2)]).to_string(), "x²y");
        assert_eq!(m(&[("t", 12)]).to_string(), "t¹²");
    }

    #[test]
    fn debug() { 
        assert_eq!(format!("{:?}", Monomial::one()), "{}");
        assert_eq!(format!("{:?}", m(&[("y", 1), ("x", 2)])), "{x: 2, y: 1}");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() { 
        let a = m(&[("x", 2), ("y", 1)]);
        let ser = serde_json::to_string(&a).unwrap();
        assert_eq!(ser, r#"{"x":2,"y":1}"#);

        let des: Monomial = serde_json::from_str(r#"{"x":2,"z":0}"#).unwrap();
        assert_eq!(des, m(&[("x", 2)]));
    }
}
