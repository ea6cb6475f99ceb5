use std::marker::PhantomData;
use std::str::FromStr;
use log::info;
use polynomier::{MPoly, Elem, Ring, RingOps, AddMon, Mon};
use crate::app::utils::*;
use crate::app::err::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Op { 
    #[default] Show, 
    Add, Sub, Mul
}

pub fn dispatch(args: &Args, op: Op) -> Result<String, Box<dyn std::error::Error>> {
    let args = Args { op, ..args.clone() };
    dispatch_ring!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    #[arg(required = true)]
    pub polys: Vec<String>,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(short, long)]
    pub raw: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,

    #[arg(skip)]
    pub op: Op,
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
        let ps = self.args.polys.iter().map(|s| 
            parse_poly::<R>(s)
        ).collect::<Result<Vec<_>, _>>()?;

        info!("{:?} over {}: {} operand(s)", self.args.op, R::math_symbol(), ps.len());

        let res = match self.args.op { 
            Op::Show => { 
                ensure!(ps.len() == 1, "`show` takes exactly one polynomial.");
                ps.into_iter().next().unwrap_or_default()
            },
            Op::Add => MPoly::sum(ps),
            Op::Mul => MPoly::product(ps),
            Op::Sub => { 
                let mut itr = ps.into_iter();
                let first = itr.next().unwrap_or_default();
                itr.fold(first, |res, p| res - p)
            },
        };

        if self.args.raw { 
            Ok(res.to_raw_string())
        } else { 
            Ok(res.to_string())
        }
    }
}
