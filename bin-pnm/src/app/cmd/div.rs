use std::marker::PhantomData;
use std::str::FromStr;
use log::info;
use crate::app::utils::*;
use crate::app::err::*;
use polynomier::{MPoly, Field, FieldOps};

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_field!(App, args)
}

/// Long division of univariate polynomials in `var`.
#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub dividend: String,
    pub divisor: String,

    #[arg(short, long, default_value = "x")]
    pub var: String,

    #[arg(short = 't', long, default_value = "Q")]
    pub c_type: CType,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where
    R: Field + FromStr,
    for<'x> &'x R: FieldOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Field + FromStr,
    for<'x> &'x R: FieldOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let x = parse_var(&self.args.var)?;
        let f = parse_poly::<R>(&self.args.dividend)?.as_univar::<'x'>(x)?;
        let g = parse_poly::<R>(&self.args.divisor)?.as_univar::<'x'>(x)?;

        let (q, r) = f.div_rem(&g)?;

        info!("deg: {:?} / {:?}", f.degree().ok(), g.degree().ok());

        let q = MPoly::from_univar(&q, x);
        let r = MPoly::from_univar(&r, x);

        Ok(format!("q = {q}\nr = {r}"))
    }
}
