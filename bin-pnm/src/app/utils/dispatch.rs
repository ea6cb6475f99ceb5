cfg_if::cfg_if! {
    if #[cfg(feature = "i128")] {
        pub type Int = i128;
    } else if #[cfg(feature = "bigint")] {
        pub type Int = num_bigint::BigInt;
    } else {
        pub type Int = i64;
    }
}

macro_rules! dispatch_ring {
    ($app:ident, $args:expr) => {{
        use polynomier::Ratio;
        use crate::app::utils::dispatch::*;

        type Z = Int;
        type Q = Ratio<Int>;

        match $args.c_type {
            CType::Z => run!(Z,   $app, $args),
            CType::Q => run!(Q,   $app, $args),
            CType::R => run!(f64, $app, $args),
        }
    }};
}

macro_rules! dispatch_field {
    ($app:ident, $args:expr) => {{
        use polynomier::Ratio;
        use crate::app::utils::dispatch::*;

        type Q = Ratio<Int>;

        match $args.c_type {
            CType::Q => run!(Q,   $app, $args),
            CType::R => run!(f64, $app, $args),
            c_type   => err!("`{}` is not supported for: -t {}", stringify!($app), c_type)
        }
    }};
}

macro_rules! run {
    ($c_type:ty, $app:ident, $args:expr) => {{
        let mut app: $app<$c_type> = $app::new($args.clone());
        app.run()
    }}
}

pub(crate) use {dispatch_ring, dispatch_field, run};
