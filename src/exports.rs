use paste::paste;
use wasm_minimal_protocol::*;

use crate::plugin;

initiate_protocol!();

macro_rules! export_func {
    ($func_name: ident, $call: path) => {
        #[wasm_func]
        fn $func_name(arg: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
            Ok($call(arg)?)
        }
    };
    ($func_name: ident, $call: path, 2) => {
        #[wasm_func]
        fn $func_name(arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
            Ok($call(arg1, arg2)?)
        }
    };
}

macro_rules! export_real_func {
    ($op: ident) => {
        paste! {
            export_func!([<quaternion_ $op _real>], plugin::[<$op _real>], 2);
        }
    };
}

export_func!(quaternion, plugin::quaternion);
export_func!(quaternion_from_complex, plugin::from_complex, 2);
export_func!(quaternion_add, plugin::add);
export_func!(quaternion_sub, plugin::sub, 2);
export_real_func!(add);
export_real_func!(sub);
export_func!(real_sub_quaternion, plugin::real_sub, 2);
export_func!(quaternion_real, plugin::real);
export_func!(quaternion_imag, plugin::imag);
export_func!(parse_quaternion, plugin::parse);
export_func!(quaternion_repr, plugin::repr);
