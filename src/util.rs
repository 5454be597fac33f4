// MIT/Apache2 License

use num_traits::Float;

pub(crate) fn approx_eq<Num: Float>(a: Num, b: Num) -> bool {
    (a - b).abs() < Num::epsilon()
}
