//! Unit constants, so that quantities can be written as `100.0 * uc::M`.

use crate::si::*;
use std::marker::PhantomData;

macro_rules! unit_const {
    ($($name:ident: $T:ident = $value:expr;)+) => {
        $(
            pub const $name: $T = $T {
                dimension: PhantomData,
                units: PhantomData,
                value: $value,
            };
        )+
    };
}

unit_const! {
    R: Ratio = 1.0;
    M: Length = 1.0;
    M2: Area = 1.0;
    M3: Volume = 1.0;
    N: Force = 1.0;
    KN: Force = 1.0e3;
    MPS: Velocity = 1.0;
}
