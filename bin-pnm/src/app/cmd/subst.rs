use std::marker::PhantomData;
use std::str::FromStr;
use log::info;
use crate::app::utils::*;
use polynomier::{Ring, RingOps};

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_ring!(App, args)
}

/// Substitutes `var` by `with` in `poly`.
#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub poly: String,
    pub var: String,
    pub with: String,

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
        let x = parse_var(&self.args.var)?;
        let q = parse_poly::<R>(&self.args.with)?;

        if !p.vars().contains(x) { 
            info!("'{x}' does not occur in {p}.");
        }

        let res = p.substitute(x, &q);
        Ok(res.to_string())
    }
}
