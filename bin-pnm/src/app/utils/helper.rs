use std::str::FromStr;
use polynomier::{MPoly, Ring, RingOps};
use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

pub fn parse_poly<R>(s: &str) -> Result<MPoly<R>, Box<dyn std::error::Error>>
where R: Ring + FromStr, for<'x> &'x R: RingOps<R> { 
    match MPoly::<R>::from_str(s) { 
        Ok(p) => Ok(p),
        Err(e) => err!("invalid input polynomial '{s}': {e}")
    }
}

pub fn parse_var(s: &str) -> Result<&str, Box<dyn std::error::Error>> { 
    let s = s.trim();
    ensure!(
        s.len() == 1 && s.chars().all(|c| c.is_ascii_alphabetic()), 
        "invalid variable: '{s}'"
    );
    Ok(s)
}
