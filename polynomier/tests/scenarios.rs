use std::str::FromStr;
use num_traits::{Zero, Pow};
use polynomier::*;

type Q = Ratio<i64>;

#[test]
fn add_render() { 
    let f = MPoly::<i64>::from_str("3x^2 + y").unwrap();
    let g = MPoly::<i64>::from_str("2x^2 + y").unwrap();
    assert_eq!((f + g).to_string(), "5x² + 2y");
}

#[test]
fn square() { 
    let x = MPoly::<i64>::variable("x");
    assert_eq!((x - 1).pow(2u32).to_string(), "x² - 2x + 1");
}

#[test]
fn cube() { 
    let f = MPoly::<i64>::from_str("x - 1").unwrap();
    let g = MPoly::<i64>::from_str("x^3 - 3x^2 + 3x - 1").unwrap();
    assert_eq!((&f).pow(3u32), g);
    assert_eq!(f.try_pow(-1), Err(PolyError::NegativeExponent(-1)));
}

#[test]
fn substitute() { 
    let f = MPoly::<i64>::from_str("x^2 - 1").unwrap();
    let t = MPoly::<i64>::from_str("t - 1").unwrap();
    let g = f.substitute("x", &t);
    assert_eq!(g, MPoly::from_str("t^2 - 2t").unwrap());
    assert_eq!(g.to_string(), "t² - 2t");
}

#[test]
fn divide_exact() { 
    type P = Poly<'x', Q>;
    let f = P::from_str("x^3 + 3x^2 + 3x + 1").unwrap();
    let g = P::from_str("x + 1").unwrap();

    let (q, r) = f.div_rem(&g).unwrap();
    assert_eq!(q, P::from_str("x^2 + 2x + 1").unwrap());
    assert!(r.is_zero());
    assert_eq!(q.to_string(), "x² + 2x + 1");
}

#[test]
fn divide_tangent() { 
    type P = Poly<'x', Q>;
    let f = P::from_coeffs([-42, 0, -12, 1].map(Q::from));
    let g = P::from_coeffs([1, -1].map(Q::from)).pow(2u32);

    assert_eq!(&f % &g, P::from_coeffs([-32, -21].map(Q::from)));
    assert_eq!(&f / &g, P::from_coeffs([-10, 1].map(Q::from)));
}

#[test]
fn divide_by_zero() { 
    type P = Poly<'x', Q>;
    let f = P::from_str("x + 1").unwrap();
    assert_eq!(f.div_rem(&P::zero()), Err(PolyError::ZeroDivisor));
}

#[test]
fn ratio_mul() { 
    assert_eq!(Q::new(3, 9) * Q::new(4, 8), Q::new(1, 6));
}

#[test]
fn parse() { 
    let ts = parse_terms::<f64>("-3x^3y^3 + 2y^2 - y").unwrap();
    let summary: Vec<_> = ts.into_iter().map(|t| 
        (t.deg, t.symbols.into_iter().collect::<Vec<_>>(), t.coeff)
    ).collect();

    assert_eq!(summary, vec![
        (3, vec!["x".to_string(), "y".to_string()], -3.0),
        (2, vec!["y".to_string()], 2.0),
        (1, vec!["y".to_string()], -1.0),
    ]);
}

#[test]
fn parse_error() { 
    assert!(matches!(MPoly::<i64>::from_str("x^2y^3"), Err(PolyError::Parse(_))));
}

#[test]
fn real_coeffs() { 
    let f = MPoly::<f64>::from_str("0.5x^2 - 1.5").unwrap();
    assert_eq!((&f * 2.0).to_string(), "x² - 3");
}

#[test]
fn gaussian_coeffs() { 
    type G = GaussInt<i64>;
    let x = MPoly::<G>::variable("x");
    let f = &x * G::new(1, 1) + G::new(0, 2);

    // non-real coefficients fall back to the raw form.
    assert_eq!(f.to_string(), f.to_raw_string());
    assert_eq!(f.to_string(), "{{x: 1}: 1 + i, {}: 2i}");
}

#[test]
fn derivative() { 
    let f = MPoly::<i64>::from_str("x^3 + 2xy").unwrap();
    assert_eq!(f.derivative("x"), Ok(MPoly::from_str("3x^2 + 2y").unwrap()));
    assert_eq!(f.derivative("z"), Err(PolyError::SymbolNotFound("z".into())));
}

#[test]
fn rational_power() { 
    assert_eq!(Q::new(4, 9).pow_ratio(&Q::new(1, 2)), Ok(Q::new(2, 3)));
    assert_eq!(Q::new(4, 9).pow_ratio(&Q::new(-3, 2)), Ok(Q::new(27, 8)));
    assert_eq!(Q::new(2, 1).pow_ratio(&Q::new(1, 2)), Err(PolyError::Irrational));
}

#[cfg(feature = "serde")]
#[test]
fn serde() { 
    let f = MPoly::<Q>::from_str("1/2x^2y - 3").unwrap();
    let ser = serde_json::to_string(&f).unwrap();
    let des: MPoly<Q> = serde_json::from_str(&ser).unwrap();
    assert_eq!(des, f);
}
