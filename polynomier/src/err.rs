use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PolyError { 
    #[display("zero denominator")]
    ZeroDenominator,

    #[display("not an integer: '{_0}'")]
    NonInteger(String),

    #[display("zero polynomial has undefined degree")]
    UndefinedDegree,

    #[display("symbol '{_0}' not found")]
    SymbolNotFound(String),

    #[display("irrational result")]
    Irrational,

    #[display("negative exponent: {_0}")]
    NegativeExponent(i64),

    #[display("non-integer exponent: '{_0}'")]
    NonIntegerExponent(String),

    #[display("division by zero polynomial")]
    ZeroDivisor,

    #[display("not univariate in '{_0}'")]
    NotUnivariate(String),

    #[display("cannot parse: {_0}")]
    Parse(String),
}

impl std::error::Error for PolyError {}

macro_rules! bail {
    ($e:expr) => {{
        return Err($e.into())
    }}
}

macro_rules! ensure {
    ($cond:expr, $e:expr) => {{
        if !$cond { 
            $crate::err::bail!($e);
        }
    }}
}

pub(crate) use {bail, ensure};
