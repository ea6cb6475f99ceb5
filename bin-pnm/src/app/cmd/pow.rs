use std::marker::PhantomData;
use std::str::FromStr;
use crate::app::utils::*;
use crate::app::err::*;
use polynomier::{Ring, RingOps};

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub poly: String,

    #[arg(allow_hyphen_values = true)]
    pub exp: String,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    args: Args,
    _ring: PhantomData<R>
}

impl<R> App<R>
where
    R: Ring + FromStr,
    for<'x> &'x R: RingOps<R>,
{
    pub fn new(args: Args) -> Self { 
        App { args, _ring: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let p = parse_poly::<R>(&self.args.poly)?;
        let Ok(n) = self.args.exp.trim().parse::<i64>() else { 
            return err!("{}", polynomier::PolyError::NonIntegerExponent(self.args.exp.clone()))
        };
        let res = p.try_pow(n)?;
        Ok(res.to_string())
    }
}
