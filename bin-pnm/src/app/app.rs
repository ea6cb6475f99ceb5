use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{calc, pow, subst, diff, div};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    Show(calc::Args),
    Add(calc::Args),
    Sub(calc::Args),
    Mul(calc::Args),
    Pow(pow::Args),
    Subst(subst::Args),
    Diff(diff::Args),
    Div(div::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        use log::LevelFilter::*;
        let level = match &self.command { 
            Cmd::Show(args) | 
            Cmd::Add(args)  | 
            Cmd::Sub(args)  | 
            Cmd::Mul(args)  => args.log,
            Cmd::Pow(args)   => args.log,
            Cmd::Subst(args) => args.log,
            Cmd::Diff(args)  => args.log,
            Cmd::Div(args)   => args.log,
        };
        match level {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn new_with(args: CliArgs) -> Self { 
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger()?;

        info!("args: {:?}", self.args);
        info!("int-type: {}", std::any::type_name::<super::utils::dispatch::Int>());

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> Result<(), Box<dyn std::error::Error>> {
        let l = self.args.log_level();
        if l != log::LevelFilter::Off { 
            polynomier::util::log::init_simple_logger(l)?;
        }
        Ok(())
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        use calc::Op;
        guard_panic(||
            match &self.args.command { 
                Cmd::Show(args)  => calc::dispatch(args, Op::Show),
                Cmd::Add(args)   => calc::dispatch(args, Op::Add),
                Cmd::Sub(args)   => calc::dispatch(args, Op::Sub),
                Cmd::Mul(args)   => calc::dispatch(args, Op::Mul),
                Cmd::Pow(args)   => pow::dispatch(args),
                Cmd::Subst(args) => subst::dispatch(args),
                Cmd::Diff(args)  => diff::dispatch(args),
                Cmd::Div(args)   => div::dispatch(args),
            }
        )
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn parse_args() { 
        let args = CliArgs::parse_from(["pnm", "add", "x + 1", "x - 1", "-t", "Q"]);
        let Cmd::Add(args) = &args.command else { 
            panic!()
        };
        assert_eq!(args.polys, vec!["x + 1", "x - 1"]);
        assert_eq!(args.c_type, CType::Q);
    }

    #[test]
    fn run() { 
        let args = CliArgs::parse_from(["pnm", "mul", "x + 1", "x - 1"]);
        let app = App::new_with(args);
        assert_eq!(app.run().unwrap(), "x² - 1");
    }

    #[test]
    fn run_err() { 
        let args = CliArgs::parse_from(["pnm", "div", "x^2", "0", "-t", "Q"]);
        let app = App::new_with(args);
        assert!(app.run().is_err());
    }
}
